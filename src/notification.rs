//! Notification module for skypick
//!
//! Provides transient toast messages for warnings that have no other UI
//! affordance (bad config file, worker disconnect).

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
