// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for contact form feedback and for warnings raised while loading
//! settings or content. Messages are i18n keys resolved at render time.
//!
//! - Success/info toasts stay 3s, warnings 5s, errors until dismissed
//! - At most 3 toasts are visible; others queue
//! - Toasts stack in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
