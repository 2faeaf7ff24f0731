use std::sync::atomic::{AtomicBool, Ordering};

use cv_core::registration::{
    RegistrationAction, RegistrationEvent, RegistrationSession, RegistrationStateMachine,
};
use tokio::sync::Mutex;

/// Result of applying one event to the shared session.
#[derive(Debug)]
pub struct Transition {
    /// Whether the session differs from the one before the event.
    pub changed: bool,
    pub session: RegistrationSession,
    pub actions: Vec<RegistrationAction>,
    /// Request ticket current after the event. Backend responses must present it.
    pub ticket: u64,
}

struct Inner {
    session: RegistrationSession,
    ticket: u64,
}

/// Shared registration context.
///
/// Holds the single session of one signup flow. Every state change goes through
/// [`apply`](Self::apply) (user input, cooldown ticks) or
/// [`apply_response`](Self::apply_response) (backend results), each of which runs
/// the state machine under the state lock.
///
/// ## Request tickets
/// Any user event that changes `pending` bumps the ticket. A backend response
/// carrying an older ticket belongs to a request the user already moved away from
/// and is dropped.
pub struct RegistrationContext {
    inner: Mutex<Inner>,
    closed: AtomicBool,
}

impl RegistrationContext {
    pub fn new(session: RegistrationSession) -> Self {
        Self {
            inner: Mutex::new(Inner { session, ticket: 0 }),
            closed: AtomicBool::new(false),
        }
    }

    pub async fn snapshot(&self) -> RegistrationSession {
        self.inner.lock().await.session.clone()
    }

    pub async fn apply(&self, event: RegistrationEvent) -> Transition {
        let mut inner = self.inner.lock().await;
        let before = inner.session.clone();
        let (next, actions) = RegistrationStateMachine::transition(before.clone(), event);
        if next.pending != before.pending {
            inner.ticket += 1;
        }
        inner.session = next.clone();
        Transition {
            changed: next != before,
            session: next,
            actions,
            ticket: inner.ticket,
        }
    }

    /// Apply a backend result issued under `ticket`.
    ///
    /// Returns `None` when the flow was closed or the ticket is stale.
    pub async fn apply_response(
        &self,
        ticket: u64,
        event: RegistrationEvent,
    ) -> Option<Transition> {
        let mut inner = self.inner.lock().await;
        if self.is_closed() || inner.ticket != ticket {
            return None;
        }
        let before = inner.session.clone();
        let (next, actions) = RegistrationStateMachine::transition(before.clone(), event);
        inner.session = next.clone();
        Some(Transition {
            changed: next != before,
            session: next,
            actions,
            ticket: inner.ticket,
        })
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::registration::PendingRequest;

    #[tokio::test]
    async fn submitting_email_bumps_ticket() {
        let ctx = RegistrationContext::new(RegistrationSession::new(None));
        let t = ctx
            .apply(RegistrationEvent::SubmitEmail {
                email: "a@b.co".into(),
            })
            .await;
        assert!(t.changed);
        assert_eq!(t.ticket, 1);
        assert_eq!(t.session.pending, Some(PendingRequest::SendOtp));
    }

    #[tokio::test]
    async fn stale_response_is_dropped() {
        let ctx = RegistrationContext::new(RegistrationSession::new(None));
        let first = ctx
            .apply(RegistrationEvent::SubmitEmail {
                email: "a@b.co".into(),
            })
            .await;
        assert!(ctx
            .apply_response(first.ticket + 1, RegistrationEvent::OtpSent)
            .await
            .is_none());
        assert!(ctx
            .apply_response(first.ticket, RegistrationEvent::OtpSent)
            .await
            .is_some());
    }

    #[tokio::test]
    async fn closed_context_drops_responses() {
        let ctx = RegistrationContext::new(RegistrationSession::new(None));
        let t = ctx
            .apply(RegistrationEvent::SubmitEmail {
                email: "a@b.co".into(),
            })
            .await;
        ctx.close();
        assert!(ctx.apply_response(t.ticket, RegistrationEvent::OtpSent).await.is_none());
    }

    #[tokio::test]
    async fn ignored_event_reports_no_change() {
        let ctx = RegistrationContext::new(RegistrationSession::new(None));
        let t = ctx.apply(RegistrationEvent::SubmitCode).await;
        assert!(!t.changed);
        assert!(t.actions.is_empty());
        assert_eq!(t.ticket, 0);
    }
}
