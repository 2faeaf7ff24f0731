use std::sync::Arc;

use cv_app::usecases::{CurrentSession, NotificationPoller};
use cv_core::ports::ApiError;

use super::terminal::{Prompt, TerminalNotificationSink};
use crate::bootstrap::AppDeps;

/// Print the feed, then keep polling until Ctrl-C unless `once` is set.
pub async fn notifications<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    once: bool,
    mark_read: bool,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let poller = NotificationPoller::new(
        deps.notification_api.clone(),
        Arc::new(TerminalNotificationSink::default()),
        user.id,
        deps.settings.notification_poll,
    );

    if once {
        if poller.refresh().await.is_none() {
            prompt.say("Notifications are unavailable right now.");
        }
    } else {
        poller.start().await;
    }

    if mark_read {
        if let Some(notice) = mark_read_notice(&poller.mark_all_read().await) {
            prompt.say(&notice);
        }
    }

    if !once {
        prompt.say("Watching for notifications, press Ctrl-C to stop.");
        tokio::signal::ctrl_c().await?;
        poller.stop().await;
    }
    Ok(())
}

/// A successful mark-read publishes the updated feed through the sink, which
/// prints it; only the other outcomes need a line of their own.
fn mark_read_notice(result: &Result<bool, ApiError>) -> Option<String> {
    match result {
        Ok(true) => None,
        Ok(false) => Some("Nothing to mark as read.".to_string()),
        Err(err) => Some(format!("Could not mark notifications as read: {err}")),
    }
}
