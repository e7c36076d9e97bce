// SPDX-License-Identifier: MPL-2.0
//! Slide data.

use serde::{Deserialize, Serialize};

/// One gallery entry: where the image lives plus the caption shown over it.
///
/// Records are immutable once built; replacing a caption means replacing the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    source: String,
    title: String,
    description: String,
}

impl SlideRecord {
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Path (relative to the content root, or absolute) or http(s) URL of the image.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true when the source must be fetched over the network.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        is_remote_source(&self.source)
    }
}

pub(crate) fn is_remote_source(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
