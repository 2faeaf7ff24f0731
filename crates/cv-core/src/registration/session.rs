use serde::{Deserialize, Serialize};

use crate::ids::ReferralId;
use crate::registration::{RegistrationError, RESEND_COOLDOWN_SECS};
use crate::security::SecretString;

/// Registration wizard step.
///
/// 注册向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStep {
    /// Email input.
    ///
    /// 输入邮箱。
    CollectEmail,
    /// One-time code verification.
    ///
    /// 验证邮箱验证码。
    VerifyOtp,
    /// Full name and password input.
    ///
    /// 填写姓名与密码。
    CollectProfile,
}

/// Backend request currently awaiting a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingRequest {
    SendOtp,
    VerifyOtp,
    CompleteRegistration,
}

/// Profile fields collected in the last step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

/// In-memory registration session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSession {
    pub step: RegistrationStep,
    /// Normalized once the code was requested; holds the raw input otherwise.
    pub email: String,
    /// Candidate code, only meaningful while `step == VerifyOtp`.
    pub otp_code: String,
    pub resend_cooldown_secs: u32,
    pub profile: ProfileDraft,
    /// Last user-visible error.
    pub error: Option<RegistrationError>,
    /// Loading flag: set while a backend call for this session is in flight.
    pub pending: Option<PendingRequest>,
    referral_id: Option<ReferralId>,
}

impl RegistrationSession {
    /// Start a session. The referral id is captured here and nowhere else.
    pub fn new(referral_id: Option<ReferralId>) -> Self {
        Self {
            step: RegistrationStep::CollectEmail,
            email: String::new(),
            otp_code: String::new(),
            resend_cooldown_secs: 0,
            profile: ProfileDraft::default(),
            error: None,
            pending: None,
            referral_id,
        }
    }

    pub fn referral_id(&self) -> Option<&ReferralId> {
        self.referral_id.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_resend(&self) -> bool {
        self.step == RegistrationStep::VerifyOtp
            && self.resend_cooldown_secs == 0
            && self.pending.is_none()
    }

    pub(crate) fn restart_cooldown(&mut self) {
        self.resend_cooldown_secs = RESEND_COOLDOWN_SECS;
    }
}

impl Default for RegistrationSession {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Payload of the final account creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub referral_id: Option<ReferralId>,
}

/// Secret-free projection of a session, safe to log and to hand to a UI.
///
/// 会话的无敏感信息视图。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationView {
    pub step: RegistrationStep,
    pub email: String,
    pub otp_code: String,
    pub resend_cooldown_secs: u32,
    pub can_resend: bool,
    pub busy: bool,
    pub full_name: String,
    pub referral_id: Option<ReferralId>,
    pub error: Option<String>,
}

impl From<&RegistrationSession> for RegistrationView {
    fn from(session: &RegistrationSession) -> Self {
        Self {
            step: session.step,
            email: session.email.clone(),
            otp_code: session.otp_code.clone(),
            resend_cooldown_secs: session.resend_cooldown_secs,
            can_resend: session.can_resend(),
            busy: session.is_busy(),
            full_name: session.profile.full_name.clone(),
            referral_id: session.referral_id.clone(),
            error: session.error.as_ref().map(RegistrationError::user_message),
        }
    }
}
