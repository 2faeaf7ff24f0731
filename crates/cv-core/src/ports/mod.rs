//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the HTTP backend, the filesystem and the clock.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `cv-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `cv-core/ports`.

pub mod account_api;
pub mod app_dirs;
pub mod auth_api;
mod clock;
pub mod errors;
pub mod investment_api;
pub mod notification;
pub mod plan_api;
pub mod referral_api;
pub mod registration_api;
pub mod registration_event;
pub mod session_store;
pub mod wallet_api;

pub use account_api::AccountApiPort;
pub use app_dirs::AppDirsPort;
pub use auth_api::AuthApiPort;
pub use clock::*;
pub use errors::{ApiError, AppDirsError, SessionStoreError};
pub use investment_api::InvestmentApiPort;
pub use notification::{NotificationApiPort, NotificationSink};
pub use plan_api::PlanApiPort;
pub use referral_api::ReferralApiPort;
pub use registration_api::RegistrationApiPort;
pub use registration_event::RegistrationEventPort;
pub use session_store::SessionStorePort;
pub use wallet_api::WalletApiPort;
