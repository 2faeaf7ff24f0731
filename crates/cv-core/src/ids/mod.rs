//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::{impl_id, impl_lenient_deserialize};

/// Backend user identifier.
///
/// The backend emits ids either as JSON strings or as bare numbers, so both
/// forms are accepted and normalized to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Backend investment identifier. Same wire leniency as [`UserId`], as are the
/// other backend ids below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvestmentId(String);

/// Investment plan identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlanId(String);

/// Platform deposit wallet identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WalletId(String);

/// Deposit or withdrawal record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

/// Opaque identifier of the referring user, captured from the entry URL.
///
/// It is never interpreted by the client, only forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralId(String);

impl_id!(UserId, InvestmentId, PlanId, WalletId, TransactionId, ReferralId);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

impl_lenient_deserialize!(UserId, InvestmentId, PlanId, WalletId, TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_numeric_and_string_json() {
        let from_number: UserId = serde_json::from_str("17").unwrap();
        let from_string: UserId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "17");
    }

    #[test]
    fn plan_id_accepts_numeric_json() {
        let id: PlanId = serde_json::from_str("3").unwrap();
        assert_eq!(id, PlanId::from("3"));
    }

    #[test]
    fn referral_id_serializes_transparently() {
        let id = ReferralId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
