//! Registration state machine.
//!
//! Defines a pure state transition function for the signup flow:
//! collect email -> verify emailed code -> collect profile.

use crate::registration::{
    normalize_email, PendingRequest, RegistrationError, RegistrationRequest, RegistrationSession,
    RegistrationStep, OTP_CODE_LEN,
};
use crate::security::SecretString;

/// Events that drive the registration flow.
///
/// 驱动注册流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// User submits the email form.
    ///
    /// 用户提交邮箱。
    SubmitEmail { email: String },
    /// Code request succeeded (backend).
    OtpSent,
    /// Code request failed (backend or transport).
    OtpSendFailed { error: RegistrationError },
    /// User edits the code field.
    EditCode { code: String },
    /// User clears the code field.
    ClearCode,
    /// User submits the code form.
    ///
    /// 用户提交验证码。
    SubmitCode,
    /// Code accepted (backend).
    OtpVerified,
    /// Code refused (backend or transport).
    OtpRejected { error: RegistrationError },
    /// User goes back to the email form.
    ///
    /// 用户返回修改邮箱。
    ChangeEmail,
    /// User asks for a new code.
    ResendOtp,
    /// User submits the profile form.
    ///
    /// 用户提交资料。
    SubmitProfile {
        full_name: String,
        password: SecretString,
        password_confirmation: SecretString,
    },
    /// Account created (backend).
    RegistrationCompleted,
    /// Account creation failed (backend or transport).
    RegistrationFailed { error: RegistrationError },
    /// One second of resend cooldown elapsed.
    CooldownTick,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Ask the backend to email a code.
    RequestOtp { email: String },
    /// Ask the backend to check a code.
    VerifyOtp { email: String, code: String },
    /// Create the account.
    CompleteRegistration { request: RegistrationRequest },
    /// Start the one-second cooldown ticker.
    StartCooldown,
    /// Cancel the cooldown ticker.
    StopCooldown,
    /// Leave the flow for the login entry point.
    NavigateToLogin,
}

/// Pure registration state machine.
///
/// 纯状态机：不包含副作用。
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    /// Whether `event` is a form submission the current step validates.
    ///
    /// Such a submission counts as handled even when it leaves the session
    /// untouched, e.g. the same short code entered twice.
    pub fn handles_submission(session: &RegistrationSession, event: &RegistrationEvent) -> bool {
        use RegistrationEvent as E;
        use RegistrationStep as S;

        if session.is_busy() {
            return false;
        }
        match (session.step, event) {
            (S::CollectEmail, E::SubmitEmail { .. }) => session.resend_cooldown_secs == 0,
            (S::VerifyOtp, E::SubmitCode) => true,
            (S::CollectProfile, E::SubmitProfile { .. }) => true,
            _ => false,
        }
    }

    pub fn transition(
        mut session: RegistrationSession,
        event: RegistrationEvent,
    ) -> (RegistrationSession, Vec<RegistrationAction>) {
        use RegistrationEvent as E;
        use RegistrationStep as S;

        match (session.step, event) {
            (_, E::CooldownTick) => {
                session.resend_cooldown_secs = session.resend_cooldown_secs.saturating_sub(1);
                (session, Vec::new())
            }

            (S::CollectEmail, E::SubmitEmail { email }) => {
                if session.is_busy() || session.resend_cooldown_secs > 0 {
                    return (session, Vec::new());
                }
                let normalized = normalize_email(&email);
                if normalized.is_empty() {
                    session.email = email;
                    session.error = Some(RegistrationError::EmailEmpty);
                    return (session, Vec::new());
                }
                session.email = normalized.clone();
                session.error = None;
                session.pending = Some(PendingRequest::SendOtp);
                (
                    session,
                    vec![RegistrationAction::RequestOtp { email: normalized }],
                )
            }
            (S::CollectEmail | S::VerifyOtp, E::OtpSent)
                if session.pending == Some(PendingRequest::SendOtp) =>
            {
                session.step = S::VerifyOtp;
                session.pending = None;
                session.error = None;
                session.restart_cooldown();
                (session, vec![RegistrationAction::StartCooldown])
            }
            (S::CollectEmail | S::VerifyOtp, E::OtpSendFailed { error })
                if session.pending == Some(PendingRequest::SendOtp) =>
            {
                session.pending = None;
                session.error = Some(error);
                (session, Vec::new())
            }

            (S::VerifyOtp, E::EditCode { code }) => {
                session.otp_code = code;
                (session, Vec::new())
            }
            (S::VerifyOtp, E::ClearCode) => {
                session.otp_code.clear();
                (session, Vec::new())
            }
            (S::VerifyOtp, E::SubmitCode) => {
                if session.is_busy() {
                    return (session, Vec::new());
                }
                if session.otp_code.chars().count() != OTP_CODE_LEN {
                    session.error = Some(RegistrationError::CodeLength {
                        expected: OTP_CODE_LEN,
                    });
                    return (session, Vec::new());
                }
                session.error = None;
                session.pending = Some(PendingRequest::VerifyOtp);
                let action = RegistrationAction::VerifyOtp {
                    email: session.email.clone(),
                    code: session.otp_code.clone(),
                };
                (session, vec![action])
            }
            (S::VerifyOtp, E::OtpVerified)
                if session.pending == Some(PendingRequest::VerifyOtp) =>
            {
                session.step = S::CollectProfile;
                session.pending = None;
                session.error = None;
                session.otp_code.clear();
                (session, Vec::new())
            }
            (S::VerifyOtp, E::OtpRejected { error })
                if session.pending == Some(PendingRequest::VerifyOtp) =>
            {
                // Email stays, code stays editable: a typo must not force a restart.
                session.pending = None;
                session.error = Some(error);
                (session, Vec::new())
            }
            (S::VerifyOtp, E::ChangeEmail) => {
                session.step = S::CollectEmail;
                session.otp_code.clear();
                session.resend_cooldown_secs = 0;
                session.pending = None;
                session.error = None;
                (session, vec![RegistrationAction::StopCooldown])
            }
            (S::VerifyOtp, E::ResendOtp) => {
                if !session.can_resend() {
                    return (session, Vec::new());
                }
                session.error = None;
                session.pending = Some(PendingRequest::SendOtp);
                let action = RegistrationAction::RequestOtp {
                    email: session.email.clone(),
                };
                (session, vec![action])
            }

            (
                S::CollectProfile,
                E::SubmitProfile {
                    full_name,
                    password,
                    password_confirmation,
                },
            ) => {
                if session.is_busy() {
                    return (session, Vec::new());
                }
                session.profile.full_name = full_name;
                session.profile.password = password;
                session.profile.password_confirmation = password_confirmation;

                let name = session.profile.full_name.trim().to_string();
                if name.is_empty() || session.profile.password.is_empty() {
                    session.error = Some(RegistrationError::ProfileIncomplete);
                    return (session, Vec::new());
                }
                if session.profile.password != session.profile.password_confirmation {
                    session.error = Some(RegistrationError::PasswordMismatch);
                    return (session, Vec::new());
                }
                session.error = None;
                session.pending = Some(PendingRequest::CompleteRegistration);
                let request = RegistrationRequest {
                    full_name: name,
                    email: session.email.clone(),
                    password: session.profile.password.clone(),
                    referral_id: session.referral_id().cloned(),
                };
                (
                    session,
                    vec![RegistrationAction::CompleteRegistration { request }],
                )
            }
            (S::CollectProfile, E::RegistrationCompleted)
                if session.pending == Some(PendingRequest::CompleteRegistration) =>
            {
                session.pending = None;
                session.error = None;
                (
                    session,
                    vec![
                        RegistrationAction::StopCooldown,
                        RegistrationAction::NavigateToLogin,
                    ],
                )
            }
            (S::CollectProfile, E::RegistrationFailed { error })
                if session.pending == Some(PendingRequest::CompleteRegistration) =>
            {
                session.pending = None;
                session.error = Some(error);
                session.profile.password = SecretString::default();
                session.profile.password_confirmation = SecretString::default();
                (session, Vec::new())
            }

            (_step, _event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(step = ?_step, event = ?_event, "registration event ignored");
                (session, Vec::new())
            }
        }
    }
}
