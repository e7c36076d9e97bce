// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, renders from it, and reports intent to the application
//! through messages or effects.
//!
//! # Sections
//!
//! - [`hero`] - Profile header with the typing effect
//! - [`cards`] - About, skills, projects and education cards
//! - [`certificates`] - Certificate grid and lightbox
//! - [`gallery`] - Slideshow view over [`crate::gallery::Slideshow`]
//! - [`contact`] - Contact form with validation
//!
//! # Shared Infrastructure
//!
//! - [`sections`] - Section catalogue, scroll geometry and reveal tracking
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod cards;
pub mod certificates;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
