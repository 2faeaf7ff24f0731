/// Normalize an email address before it is used as a backend lookup key.
///
/// The backend keys OTP records by email, so `" Jane@Example.com"` and
/// `"jane@example.com"` must reach it as the same string.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
