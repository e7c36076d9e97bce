// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio rendered as a native desktop application
//! with the Iced GUI framework.
//!
//! The centerpiece is the gallery slideshow ([`gallery::Slideshow`]): an
//! auto-advancing, keyboard, pointer and touch driven carousel that degrades
//! to numbered placeholders when images cannot be loaded. Around it sit the
//! profile sections, a certificate lightbox and a contact form, localized
//! with Fluent.

pub mod app;
pub mod content;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;
