//! Referral program statistics and the user's invite link.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Totals and the list of users who signed up through the user's link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferralStats {
    #[serde(default, deserialize_with = "crate::lenient::count")]
    pub total_referrals: u32,
    #[serde(default, deserialize_with = "crate::lenient::amount_or_zero")]
    pub referral_earnings: f64,
    #[serde(default, deserialize_with = "referral_list")]
    pub referral_list: Vec<Referral>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "crate::lenient::text")]
    pub rank: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Signup URL carrying `user_id` as the referral id.
///
/// 邀请链接：`{site}/signup?ref={user_id}`。
pub fn referral_link(site_url: &str, user_id: &UserId) -> String {
    format!("{}/signup?ref={user_id}", site_url.trim_end_matches('/'))
}

/// Anything other than an array reads as an empty list.
fn referral_list<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Referral>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_tolerate_strings_and_missing_list() {
        let stats: ReferralStats =
            serde_json::from_str(r#"{"total_referrals":"4","referral_earnings":"12.75"}"#).unwrap();
        assert_eq!(stats.total_referrals, 4);
        assert_eq!(stats.referral_earnings, 12.75);
        assert!(stats.referral_list.is_empty());
    }

    #[test]
    fn non_array_list_is_empty() {
        let stats: ReferralStats = serde_json::from_str(r#"{"referral_list":"none"}"#).unwrap();
        assert!(stats.referral_list.is_empty());
    }

    #[test]
    fn numeric_rank_is_kept_as_text() {
        let stats: ReferralStats = serde_json::from_str(
            r#"{"referral_list":[{"full_name":"Ann","rank":2,"created_at":"2025-03-01"}]}"#,
        )
        .unwrap();
        assert_eq!(stats.referral_list[0].rank, "2");
    }

    #[test]
    fn link_points_at_signup_with_ref() {
        assert_eq!(
            referral_link("https://coinvest.example/", &UserId::from("17")),
            "https://coinvest.example/signup?ref=17"
        );
    }
}
