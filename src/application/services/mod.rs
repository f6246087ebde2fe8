/// Module containing bookmark service for reading and toggling bookmarks
pub mod bookmark_service;
/// Module containing notification service for listing and managing notifications
pub mod notification_service;

pub use crate::application::interfaces::bookmark::*;
pub use crate::application::interfaces::notification::*;
pub use bookmark_service::BookmarkServiceImpl;
pub use notification_service::NotificationServiceImpl;
