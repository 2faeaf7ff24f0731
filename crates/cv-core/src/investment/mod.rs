//! Investment ("staking plan") models and the maturity countdown.

mod countdown;
mod model;

pub use countdown::MaturityCountdown;
pub use model::{Investment, InvestmentStatus};
