//! Notification use cases.

mod poller;

pub use poller::NotificationPoller;
