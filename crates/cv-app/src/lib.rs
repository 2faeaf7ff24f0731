//! CoinVest Application Orchestration Layer
//!
//! This crate contains the client use cases (registration, sign-in, notifications,
//! investments, wallet, plans, referrals, password change) and the runtime pieces
//! they share.

pub mod app_paths;
pub mod periodic;
pub mod settings;
pub mod usecases;

pub use periodic::PeriodicTask;
pub use settings::{ApiSettings, SettingsError};
