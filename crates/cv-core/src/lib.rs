//! # cv-core
//!
//! Core domain models and business logic for the CoinVest client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Everything that talks to the backend, the filesystem or the clock goes through
//! the traits in [`ports`].

pub mod app_dirs;
pub mod auth;
pub mod config;
pub mod ids;
pub mod investment;
mod lenient;
pub mod notification;
pub mod plan;
pub mod ports;
pub mod referral;
pub mod registration;
pub mod security;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use auth::{AdminSession, PasswordChange, SessionSnapshot, UserSession};
pub use config::AppConfig;
pub use ids::{InvestmentId, PlanId, ReferralId, TransactionId, UserId, WalletId};
pub use registration::{
    RegistrationAction, RegistrationError, RegistrationEvent, RegistrationSession,
    RegistrationStateMachine, RegistrationStep,
};
pub use security::SecretString;
