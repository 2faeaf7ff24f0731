//! Investment use cases.
//!
//! 投资到期追踪与收益领取。

mod claim_payout;
mod track;

pub use claim_payout::{ClaimPayout, ClaimPayoutError};
pub use track::{InvestmentStatusView, TrackInvestment};
