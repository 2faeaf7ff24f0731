//! Registration domain module.
//!
//! This module defines the signup/verification state machine types: the
//! in-memory session, the events that drive it and the side effects it asks
//! the orchestrator to perform.

mod email;
mod error;
mod session;
pub mod state_machine;

pub use email::normalize_email;
pub use error::RegistrationError;
pub use session::{
    PendingRequest, ProfileDraft, RegistrationRequest, RegistrationSession, RegistrationStep,
    RegistrationView,
};
pub use state_machine::{RegistrationAction, RegistrationEvent, RegistrationStateMachine};

/// Seconds a user must wait between two verification code requests.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Length of the emailed one-time code.
pub const OTP_CODE_LEN: usize = 6;
