use thiserror::Error;

use crate::security::SecretString;

/// Shortest new password the settings page accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordChangeError {
    #[error("Please fill in all password fields")]
    Incomplete,
    #[error("New passwords do not match")]
    Mismatch,
    #[error("New password must be at least {min} characters")]
    TooShort { min: usize },
}

/// A validated request to replace the current password.
///
/// 修改密码请求（已通过本地校验）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    current: SecretString,
    new: SecretString,
}

impl PasswordChange {
    pub fn new(
        current: SecretString,
        new: SecretString,
        confirmation: SecretString,
    ) -> Result<Self, PasswordChangeError> {
        if current.is_empty() || new.is_empty() || confirmation.is_empty() {
            return Err(PasswordChangeError::Incomplete);
        }
        if new != confirmation {
            return Err(PasswordChangeError::Mismatch);
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordChangeError::TooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(Self { current, new })
    }

    pub fn current(&self) -> &SecretString {
        &self.current
    }

    pub fn new_password(&self) -> &SecretString {
        &self.new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<PasswordChange, PasswordChangeError> {
        PasswordChange::new(current.into(), new.into(), confirm.into())
    }

    #[test]
    fn every_field_is_required() {
        assert_eq!(change("", "longenough", "longenough"), Err(PasswordChangeError::Incomplete));
        assert_eq!(change("old", "longenough", ""), Err(PasswordChangeError::Incomplete));
    }

    #[test]
    fn confirmation_is_checked_before_length() {
        assert_eq!(change("old", "short", "shorter"), Err(PasswordChangeError::Mismatch));
        assert_eq!(
            change("old", "short", "short").unwrap_err().to_string(),
            "New password must be at least 8 characters"
        );
    }

    #[test]
    fn valid_change_keeps_both_passwords() {
        let ok = change("old-pass", "new-pass-1", "new-pass-1").unwrap();
        assert_eq!(ok.current().expose(), "old-pass");
        assert_eq!(ok.new_password().expose(), "new-pass-1");
    }
}
