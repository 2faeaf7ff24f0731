//! Terminal I/O shared by the interactive commands.
//!
//! 终端输入输出。

use std::io::{IsTerminal, Write};

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use cv_core::notification::NotificationFeed;
use cv_core::ports::{NotificationSink, RegistrationEventPort};
use cv_core::registration::RegistrationView;
use cv_core::{RegistrationStep, SecretString};

/// Line-oriented user input.
///
/// `Ok(None)` means the input was closed (EOF, Ctrl-D).
#[async_trait]
pub trait Prompt: Send {
    async fn line(&mut self, label: &str) -> anyhow::Result<Option<String>>;

    async fn secret(&mut self, label: &str) -> anyhow::Result<Option<SecretString>>;

    fn say(&mut self, message: &str);
}

/// Stdin/stdout prompt. Secrets are read without echo when stdin is a TTY.
pub struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompt for Terminal {
    async fn line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{label}")?;
        stdout.flush()?;
        let line = self.lines.next_line().await.context("Failed to read stdin")?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    async fn secret(&mut self, label: &str) -> anyhow::Result<Option<SecretString>> {
        if !std::io::stdin().is_terminal() {
            return Ok(self.line(label).await?.map(SecretString::from));
        }
        let prompt = label.trim_end().trim_end_matches(':').to_string();
        let read = tokio::task::spawn_blocking(move || {
            dialoguer::Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
        })
        .await
        .context("Password prompt task failed")?;
        match read {
            Ok(value) => Ok(Some(SecretString::from(value))),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read password"),
        }
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Notices worth printing when the registration view moves from `prev` to `next`.
///
/// Cooldown ticks are silent except for the one that re-enables resend. Errors are
/// not notices: the driver reports them for every submission that produced one.
pub fn registration_notices(
    prev: Option<&RegistrationView>,
    next: &RegistrationView,
) -> Vec<String> {
    let mut notices = Vec::new();

    if let Some(prev) = prev {
        if prev.step != next.step && next.step == RegistrationStep::VerifyOtp {
            notices.push(format!("A verification code was sent to {}.", next.email));
        }
        let cooldown_finished = prev.resend_cooldown_secs > 0 && next.resend_cooldown_secs == 0;
        if cooldown_finished && next.step == RegistrationStep::VerifyOtp {
            notices.push("You can request a new code now (type 'resend').".to_string());
        }
    }

    notices
}

/// Prints registration notices to stdout.
#[derive(Default)]
pub struct TerminalRegistrationEvents {
    last: Mutex<Option<RegistrationView>>,
}

#[async_trait]
impl RegistrationEventPort for TerminalRegistrationEvents {
    async fn emit_state_changed(&self, view: RegistrationView) {
        let mut last = self.last.lock().await;
        for notice in registration_notices(last.as_ref(), &view) {
            println!("{notice}");
        }
        *last = Some(view);
    }

    async fn emit_completed(&self, email: String) {
        println!("Account created for {email}. You can now sign in with `coinvest login`.");
    }
}

/// One line per notification, unread ones marked with `*`.
pub fn render_feed(feed: &NotificationFeed) -> String {
    let mut out = format!("{} unread", feed.unread_count);
    if feed.list.is_empty() {
        out.push_str("\n  (no notifications)");
    }
    for n in &feed.list {
        let marker = if n.is_read { ' ' } else { '*' };
        out.push_str(&format!("\n{marker} {}", n.title));
        if let Some(when) = n.created_at.as_deref().filter(|w| !w.is_empty()) {
            out.push_str(&format!(" {when}"));
        }
        out.push_str(&format!("\n    {}", n.message));
    }
    out
}

/// Prints every feed that differs from the previous one.
#[derive(Default)]
pub struct TerminalNotificationSink {
    last: Mutex<Option<NotificationFeed>>,
}

#[async_trait]
impl NotificationSink for TerminalNotificationSink {
    async fn publish(&self, feed: NotificationFeed) {
        let mut last = self.last.lock().await;
        if last.as_ref() != Some(&feed) {
            println!("{}", render_feed(&feed));
        }
        *last = Some(feed);
    }
}
