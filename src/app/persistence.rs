// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only the theme choice is written back; the rest of `settings.toml` is
//! preserved as loaded from disk.

use super::config;
use crate::ui::theming::ThemeMode;

/// Stores `theme_mode` in the settings file.
///
/// Failures are logged and otherwise ignored: the theme still applies for
/// the running session. Disabled under `cfg(test)` so unit tests never touch
/// the user's settings.
pub fn persist_theme(theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = theme_mode;

    match config::save(&cfg) {
        Ok(()) => tracing::debug!(?theme_mode, "theme preference saved"),
        Err(error) => tracing::warn!(%error, "failed to save theme preference"),
    }
}
