/// Bookmark service interface
pub mod bookmark;
/// Notification service interface
pub mod notification;
