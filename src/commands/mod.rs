//! # Commands / 命令
//!
//! clap definitions and one handler per subcommand. Handlers only translate
//! between the terminal and the use cases in `cv-app`.
//! 命令处理器只负责终端与用例之间的转换。

mod account;
mod auth;
mod investment;
mod notifications;
mod plans;
mod signup;
pub mod terminal;
mod wallet;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::bootstrap::AppDeps;
use terminal::Terminal;

pub use investment::render_status;
pub use signup::{drive_registration, referral_from_arg};

#[derive(Debug, Parser)]
#[command(name = "coinvest")]
#[command(about = "CoinVest investment platform client", long_about = None)]
pub struct Cli {
    /// Config file [default: <data-local dir>/coinvest/config.toml]
    #[arg(long, global = true, env = "CV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account (email, verification code, profile)
    Signup {
        /// Referral id from an invitation link, forwarded unchanged
        #[arg(long = "ref")]
        referral: Option<String>,
    },
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Sign in to the admin area
    AdminLogin {
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Forget the user session
    Logout,
    /// Show the remembered sessions
    Whoami,
    /// Show notifications for the signed-in user
    Notifications {
        /// Fetch once and exit instead of polling
        #[arg(long)]
        once: bool,
        /// Mark all notifications as read
        #[arg(long)]
        mark_read: bool,
    },
    /// Show an investment's maturity countdown
    Investment {
        id: String,
        /// Claim the payout (only once matured)
        #[arg(long)]
        claim: bool,
    },
    /// Show balance and recent transactions
    Dashboard,
    /// List the investment plans on offer
    Plans,
    /// Buy a plan, from balance when it covers the amount, otherwise by crypto transfer
    Invest {
        plan_id: String,
        amount: f64,
        /// Deposit wallet id for crypto payment [default: first listed]
        #[arg(long)]
        wallet: Option<String>,
    },
    /// List your investments
    Investments,
    /// Log a crypto deposit and show where to send it
    Deposit {
        amount: f64,
        /// Deposit wallet id [default: first listed]
        #[arg(long)]
        wallet: Option<String>,
    },
    /// Show deposit history
    Deposits,
    /// Request a withdrawal to an external wallet
    Withdraw {
        amount: f64,
        address: String,
        /// Network of the receiving wallet [default: ERC20]
        #[arg(long)]
        network: Option<String>,
    },
    /// Show your invite link and referral earnings
    Referrals,
    /// Change the account password
    ChangePassword,
}

pub async fn run(command: Commands, deps: AppDeps) -> anyhow::Result<()> {
    let mut terminal = Terminal::new();
    match command {
        Commands::Signup { referral } => signup::signup(&deps, referral).await,
        Commands::Login { email } => auth::login(&deps, &mut terminal, email).await,
        Commands::AdminLogin { email } => auth::admin_login(&deps, &mut terminal, email).await,
        Commands::Logout => auth::logout(&deps, &mut terminal).await,
        Commands::Whoami => auth::whoami(&deps, &mut terminal).await,
        Commands::Notifications { once, mark_read } => {
            notifications::notifications(&deps, &mut terminal, once, mark_read).await
        }
        Commands::Investment { id, claim } => {
            investment::investment(&deps, &mut terminal, id, claim).await
        }
        Commands::Dashboard => wallet::dashboard(&deps, &mut terminal).await,
        Commands::Plans => plans::plans(&deps, &mut terminal).await,
        Commands::Invest {
            plan_id,
            amount,
            wallet,
        } => plans::invest(&deps, &mut terminal, plan_id, amount, wallet).await,
        Commands::Investments => plans::investments(&deps, &mut terminal).await,
        Commands::Deposit { amount, wallet } => {
            wallet::deposit(&deps, &mut terminal, amount, wallet).await
        }
        Commands::Deposits => wallet::deposits(&deps, &mut terminal).await,
        Commands::Withdraw {
            amount,
            address,
            network,
        } => wallet::withdraw(&deps, &mut terminal, amount, address, network).await,
        Commands::Referrals => account::referrals(&deps, &mut terminal).await,
        Commands::ChangePassword => account::change_password(&deps, &mut terminal).await,
    }
}
