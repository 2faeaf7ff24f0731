//! Infrastructure adapters: the HTTP backend client, the session file, the
//! system clock and platform directories.

pub mod app_dirs;
pub mod http;
pub mod session;
pub mod time;

pub use app_dirs::DirsAppDirsAdapter;
pub use http::HttpBackend;
pub use session::FileSessionStore;
pub use time::SystemClock;
