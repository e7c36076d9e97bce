// SPDX-License-Identifier: MPL-2.0
//! Asynchronous slide image loading.
//!
//! Sources are either paths (relative ones are resolved against the content
//! root) or http(s) URLs. The encoded bytes are validated by reading the
//! image header before a handle is produced, so a broken file surfaces as a
//! load failure instead of a blank slide.

use super::record::is_remote_source;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));

/// Where a slide source points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(String),
    File(PathBuf),
}

/// Resolves `source` against `root`.
#[must_use]
pub fn resolve(source: &str, root: &Path) -> Location {
    if is_remote_source(source) {
        return Location::Remote(source.to_string());
    }
    let path = Path::new(source);
    if path.is_absolute() {
        Location::File(path.to_path_buf())
    } else {
        Location::File(root.join(path))
    }
}

/// Loads and validates the image behind `source`.
///
/// # Errors
///
/// - [`Error::Io`] when a file cannot be read
/// - [`Error::Network`] when a download fails or returns a non-success status
/// - [`Error::Image`] when the bytes are not a decodable image
pub async fn load(source: String, root: PathBuf) -> Result<Handle> {
    let bytes = match resolve(&source, &root) {
        Location::Remote(url) => fetch(&url).await?,
        Location::File(path) => tokio::fs::read(&path).await?,
    };
    decode(bytes)
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Checks that `bytes` hold a supported image and wraps them in a handle.
pub fn decode(bytes: Vec<u8>) -> Result<Handle> {
    let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()?
        .into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    Ok(Handle::from_bytes(bytes))
}
