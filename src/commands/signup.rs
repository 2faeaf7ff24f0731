//! Interactive sign-up: email, then code, then profile.
//!
//! 交互式注册流程。

use std::sync::Arc;

use anyhow::bail;
use tracing::info;

use cv_app::usecases::{DispatchOutcome, RegistrationOrchestrator};
use cv_core::registration::RegistrationView;
use cv_core::{ReferralId, RegistrationStep};

use super::terminal::{Prompt, Terminal, TerminalRegistrationEvents};
use crate::bootstrap::AppDeps;

const RESEND_COMMAND: &str = "resend";
const CHANGE_COMMAND: &str = "change";

pub async fn signup(deps: &AppDeps, referral: Option<String>) -> anyhow::Result<()> {
    let flow = RegistrationOrchestrator::new(
        deps.registration_api.clone(),
        Arc::new(TerminalRegistrationEvents::default()),
        referral_from_arg(referral),
    );

    let email = drive_registration(&flow, &mut Terminal::new()).await?;
    info!(%email, "registration finished");
    Ok(())
}

/// `--ref` is forwarded verbatim; only an empty value means "no referral".
pub fn referral_from_arg(raw: Option<String>) -> Option<ReferralId> {
    raw.filter(|r| !r.is_empty()).map(ReferralId::from)
}

fn code_label(view: &RegistrationView) -> String {
    if view.can_resend {
        format!("Code ('{RESEND_COMMAND}' for a new one, '{CHANGE_COMMAND}' to edit email): ")
    } else {
        format!(
            "Code [resend in {}s] ('{CHANGE_COMMAND}' to edit email): ",
            view.resend_cooldown_secs
        )
    }
}

/// Run the flow until the account exists. Returns the registered email.
///
/// Closing the input aborts and closes the flow.
pub async fn drive_registration<P: Prompt + ?Sized>(
    flow: &RegistrationOrchestrator,
    prompt: &mut P,
) -> anyhow::Result<String> {
    loop {
        let view = flow.snapshot().await;
        let outcome = match view.step {
            RegistrationStep::CollectEmail => {
                let Some(email) = prompt.line("Email: ").await? else {
                    break;
                };
                flow.submit_email(email).await
            }
            RegistrationStep::VerifyOtp => {
                let Some(input) = prompt.line(&code_label(&view)).await? else {
                    break;
                };
                match input.as_str() {
                    RESEND_COMMAND => {
                        let outcome = flow.resend_code().await;
                        if outcome == DispatchOutcome::Ignored {
                            prompt.say("A new code cannot be requested yet.");
                        }
                        outcome
                    }
                    CHANGE_COMMAND => flow.change_email().await,
                    code => {
                        flow.edit_code(code).await;
                        flow.submit_code().await
                    }
                }
            }
            RegistrationStep::CollectProfile => {
                let Some(full_name) = prompt.line("Full name: ").await? else {
                    break;
                };
                let Some(password) = prompt.secret("Password: ").await? else {
                    break;
                };
                let Some(confirmation) = prompt.secret("Confirm password: ").await? else {
                    break;
                };
                flow.submit_profile(full_name, password, confirmation).await
            }
        };

        match outcome {
            DispatchOutcome::Completed { email } => return Ok(email),
            DispatchOutcome::Applied(RegistrationView {
                error: Some(error), ..
            }) => prompt.say(&format!("! {error}")),
            _ => {}
        }
    }

    flow.close().await;
    bail!("input closed before registration finished")
}
