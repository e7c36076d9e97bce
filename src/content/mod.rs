// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: profile, skills, projects, education, certificates and
//! the gallery seed.
//!
//! Content comes from a TOML file passed with `--content`, or from the
//! built-in default when no file is given. Missing tables in a content file
//! fall back to empty lists, except `[[gallery]]` which falls back to the
//! built-in seed so the slideshow is never empty by accident.

use crate::error::{Error, Result};
use crate::gallery::SlideRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of images in the built-in gallery seed.
pub const DEFAULT_GALLERY_SIZE: usize = 17;
const DEFAULT_SLIDE_TITLE: &str = "Photography";
const DEFAULT_SLIDE_DESCRIPTION: &str = "A beautiful photo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// Text revealed by the hero typing effect.
    pub subtitle: String,
    #[serde(default)]
    pub about: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".into(),
            title: "Software Engineer".into(),
            subtitle: "Building reliable software, one commit at a time".into(),
            about: "I design and build desktop and web applications, \
                    with a soft spot for photography."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    /// Image path or URL, resolved like gallery sources.
    pub source: String,
}

/// Everything the portfolio displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default = "default_gallery")]
    pub gallery: Vec<SlideRecord>,
    /// Directory relative sources are resolved against.
    #[serde(skip)]
    root: PathBuf,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            skills: vec![
                skill("Rust", "Systems programming and desktop applications"),
                skill("TypeScript", "Front-end development"),
                skill("SQL", "Data modelling and query tuning"),
                skill("Photography", "Landscape and street photography"),
            ],
            projects: vec![Project {
                title: "Folio".into(),
                description: "This portfolio, as a native application.".into(),
                tags: vec!["rust".into(), "iced".into()],
            }],
            education: vec![Education {
                degree: "MSc Computer Science".into(),
                school: "University".into(),
                period: "2015 - 2017".into(),
            }],
            certificates: vec![Certificate {
                title: "Cloud Practitioner".into(),
                issuer: "Certification Body".into(),
                source: "certificates/cloud.jpg".into(),
            }],
            gallery: default_gallery(),
            root: PathBuf::from("."),
        }
    }
}

impl Content {
    /// Parses content from TOML text. Relative sources resolve against `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] when the text is not valid content TOML.
    pub fn from_toml(text: &str, root: impl Into<PathBuf>) -> Result<Self> {
        let mut content: Content =
            toml::from_str(text).map_err(|err| Error::Content(err.to_string()))?;
        content.root = root.into();
        Ok(content)
    }

    /// Loads a content file. Its parent directory becomes the content root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Content`] when it cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let root = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::from_toml(&text, root)
    }

    /// Loads `path` if given, falling back to the default content.
    ///
    /// The second element is an i18n warning key when the fallback was taken
    /// because loading failed.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<String>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from_path(path) {
            Ok(content) => {
                tracing::info!(
                    path = %path.display(),
                    slides = content.gallery.len(),
                    "content loaded"
                );
                (content, None)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to load content, using defaults");
                (Self::default(), Some(error_key(&error).to_string()))
            }
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn error_key(error: &Error) -> &'static str {
    match error {
        Error::Io(_) | Error::Content(_) => "notification-content-load-error",
        other => other.i18n_key(),
    }
}

fn skill(name: &str, description: &str) -> Skill {
    Skill {
        name: name.into(),
        description: description.into(),
    }
}

/// The built-in gallery seed: `images/1.jpg` through `images/17.jpg`.
#[must_use]
pub fn default_gallery() -> Vec<SlideRecord> {
    (1..=DEFAULT_GALLERY_SIZE)
        .map(|n| {
            SlideRecord::new(
                format!("images/{n}.jpg"),
                DEFAULT_SLIDE_TITLE,
                DEFAULT_SLIDE_DESCRIPTION,
            )
        })
        .collect()
}
