//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and side effects:
//! backend calls, the resend cooldown ticker and the hand-off to login.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use cv_core::ports::{ApiError, RegistrationApiPort, RegistrationEventPort};
use cv_core::registration::{
    RegistrationAction, RegistrationError, RegistrationEvent, RegistrationSession,
    RegistrationStateMachine, RegistrationView,
};
use cv_core::security::SecretString;
use cv_core::ReferralId;

use crate::periodic::PeriodicTask;
use crate::usecases::registration::context::{RegistrationContext, Transition};

const COOLDOWN_TICK: Duration = Duration::from_secs(1);

const SEND_OTP_FALLBACK: &str = "Could not send the verification code.";
const VERIFY_OTP_FALLBACK: &str = "The code you entered is incorrect.";
const SIGNUP_FALLBACK: &str = "Registration failed. Please try again.";

/// What a user operation did to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event was processed; this is the resulting view.
    Applied(RegistrationView),
    /// The account was created and the flow is closed.
    Completed { email: String },
    /// The event was not valid in the current state (busy, wrong step, closed flow).
    ///
    /// A form submission that fails validation is `Applied` with the error in the
    /// view, even when it repeats the previous failure.
    Ignored,
}

/// Orchestrator that drives the signup flow and its side effects.
///
/// 注册流程编排器：驱动状态机并执行副作用。
pub struct RegistrationOrchestrator {
    context: Arc<RegistrationContext>,
    api: Arc<dyn RegistrationApiPort>,
    events: Arc<dyn RegistrationEventPort>,
    cooldown: Mutex<Option<PeriodicTask>>,
}

impl RegistrationOrchestrator {
    pub fn new(
        api: Arc<dyn RegistrationApiPort>,
        events: Arc<dyn RegistrationEventPort>,
        referral_id: Option<ReferralId>,
    ) -> Self {
        Self {
            context: Arc::new(RegistrationContext::new(RegistrationSession::new(referral_id))),
            api,
            events,
            cooldown: Mutex::new(None),
        }
    }

    pub async fn submit_email(&self, email: impl Into<String>) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::SubmitEmail {
            email: email.into(),
        })
        .await
    }

    pub async fn edit_code(&self, code: impl Into<String>) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::EditCode { code: code.into() })
            .await
    }

    pub async fn clear_code(&self) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::ClearCode).await
    }

    pub async fn submit_code(&self) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::SubmitCode).await
    }

    pub async fn resend_code(&self) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::ResendOtp).await
    }

    pub async fn change_email(&self) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::ChangeEmail).await
    }

    pub async fn submit_profile(
        &self,
        full_name: impl Into<String>,
        password: SecretString,
        password_confirmation: SecretString,
    ) -> DispatchOutcome {
        self.dispatch(RegistrationEvent::SubmitProfile {
            full_name: full_name.into(),
            password,
            password_confirmation,
        })
        .await
    }

    pub async fn snapshot(&self) -> RegistrationView {
        RegistrationView::from(&self.context.snapshot().await)
    }

    pub async fn is_cooldown_running(&self) -> bool {
        self.cooldown
            .lock()
            .await
            .as_ref()
            .is_some_and(PeriodicTask::is_running)
    }

    pub fn is_closed(&self) -> bool {
        self.context.is_closed()
    }

    /// Leave the flow. Pending responses are dropped and the ticker is cancelled.
    pub async fn close(&self) {
        self.context.close();
        self.stop_cooldown().await;
    }

    async fn dispatch(&self, event: RegistrationEvent) -> DispatchOutcome {
        if self.context.is_closed() {
            debug!(?event, "registration flow closed, event ignored");
            return DispatchOutcome::Ignored;
        }

        let span = info_span!("usecase.registration.dispatch", event = ?event);
        async {
            let submission = event.clone();
            let first = self.context.apply(event).await;
            if !first.changed
                && first.actions.is_empty()
                && !RegistrationStateMachine::handles_submission(&first.session, &submission)
            {
                return DispatchOutcome::Ignored;
            }

            let mut completed = None;
            let mut pending = self.settle(first, &mut completed).await;

            while let Some((ticket, follow_up)) = pending.pop() {
                let event_name = format!("{:?}", follow_up);
                match self.context.apply_response(ticket, follow_up).await {
                    Some(transition) => {
                        info!(
                            event = %event_name,
                            step = ?transition.session.step,
                            "registration response applied"
                        );
                        pending.extend(self.settle(transition, &mut completed).await);
                    }
                    None => {
                        debug!(event = %event_name, "stale registration response dropped");
                    }
                }
            }

            match completed {
                Some(email) => DispatchOutcome::Completed { email },
                None => DispatchOutcome::Applied(self.snapshot().await),
            }
        }
        .instrument(span)
        .await
    }

    /// Emit the new state if it changed, then run its actions.
    async fn settle(
        &self,
        transition: Transition,
        completed: &mut Option<String>,
    ) -> Vec<(u64, RegistrationEvent)> {
        if transition.changed {
            self.events
                .emit_state_changed(RegistrationView::from(&transition.session))
                .await;
        }
        self.execute_actions(transition.actions, transition.ticket, &transition.session, completed)
            .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
        ticket: u64,
        session: &RegistrationSession,
        completed: &mut Option<String>,
    ) -> Vec<(u64, RegistrationEvent)> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "registration executing action");
            match action {
                RegistrationAction::RequestOtp { email } => {
                    let event = match self.api.request_otp(&email).await {
                        Ok(()) => RegistrationEvent::OtpSent,
                        Err(err) => RegistrationEvent::OtpSendFailed {
                            error: map_api_error("send_otp", err, SEND_OTP_FALLBACK),
                        },
                    };
                    follow_up_events.push((ticket, event));
                }
                RegistrationAction::VerifyOtp { email, code } => {
                    let event = match self.api.verify_otp(&email, &code).await {
                        Ok(()) => RegistrationEvent::OtpVerified,
                        Err(err) => RegistrationEvent::OtpRejected {
                            error: map_api_error("verify_otp", err, VERIFY_OTP_FALLBACK),
                        },
                    };
                    follow_up_events.push((ticket, event));
                }
                RegistrationAction::CompleteRegistration { request } => {
                    let event = match self.api.complete_registration(&request).await {
                        Ok(()) => RegistrationEvent::RegistrationCompleted,
                        Err(err) => RegistrationEvent::RegistrationFailed {
                            error: map_api_error("signup", err, SIGNUP_FALLBACK),
                        },
                    };
                    follow_up_events.push((ticket, event));
                }
                RegistrationAction::StartCooldown => self.start_cooldown().await,
                RegistrationAction::StopCooldown => self.stop_cooldown().await,
                RegistrationAction::NavigateToLogin => {
                    self.context.close();
                    info!(email = %session.email, "registration completed");
                    self.events.emit_completed(session.email.clone()).await;
                    *completed = Some(session.email.clone());
                }
            }
        }
        follow_up_events
    }

    async fn start_cooldown(&self) {
        let context = Arc::clone(&self.context);
        let events = Arc::clone(&self.events);
        let task = PeriodicTask::spawn("registration.resend_cooldown", COOLDOWN_TICK, move || {
            let context = Arc::clone(&context);
            let events = Arc::clone(&events);
            async move {
                if context.is_closed() {
                    return ControlFlow::Break(());
                }
                let tick = context.apply(RegistrationEvent::CooldownTick).await;
                if tick.changed {
                    events
                        .emit_state_changed(RegistrationView::from(&tick.session))
                        .await;
                }
                if tick.session.resend_cooldown_secs == 0 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        });

        // Replacing the handle drops (and aborts) any previous ticker.
        *self.cooldown.lock().await = Some(task);
    }

    async fn stop_cooldown(&self) {
        if let Some(task) = self.cooldown.lock().await.take() {
            task.stop();
        }
    }
}

impl Drop for RegistrationOrchestrator {
    fn drop(&mut self) {
        self.context.close();
    }
}

fn map_api_error(endpoint: &'static str, err: ApiError, fallback: &str) -> RegistrationError {
    match err {
        ApiError::Rejected { .. } => {
            let message = err.server_message().unwrap_or(fallback).to_string();
            info!(endpoint, %message, "registration request rejected");
            RegistrationError::Rejected { message }
        }
        ApiError::Transport(detail) => {
            warn!(endpoint, %detail, "registration request failed");
            RegistrationError::Transport { detail }
        }
    }
}
