// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter is read from `FOLIO_LOG` using the usual `EnvFilter` syntax
//! (e.g. `FOLIO_LOG=folio=debug`). Without it, only `info` and above from
//! this crate are printed.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "FOLIO_LOG";

const DEFAULT_FILTER: &str = "folio=info";

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
