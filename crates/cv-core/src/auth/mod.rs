//! Signed-in user and admin sessions.
//!
//! These replace ad-hoc JSON blobs kept in browser storage: typed values that
//! are loaded and saved only through [`crate::ports::SessionStorePort`].

mod password_change;
mod session;

pub use password_change::{PasswordChange, PasswordChangeError, MIN_PASSWORD_LEN};
pub use session::{AdminSession, SessionSnapshot, UserSession, ADMIN_ROLE};
