use anyhow::bail;

use cv_app::usecases::{AdminLogin, CurrentSession, Login, Logout};

use super::terminal::Prompt;
use crate::bootstrap::AppDeps;

/// Email from the flag, otherwise asked for; then the password.
async fn credentials<P: Prompt + ?Sized>(
    prompt: &mut P,
    email: Option<String>,
) -> anyhow::Result<(String, cv_core::SecretString)> {
    let email = match email {
        Some(email) => email,
        None => match prompt.line("Email: ").await? {
            Some(email) => email,
            None => bail!("input closed"),
        },
    };
    let Some(password) = prompt.secret("Password: ").await? else {
        bail!("input closed");
    };
    Ok((email, password))
}

pub async fn login<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    email: Option<String>,
) -> anyhow::Result<()> {
    let (email, password) = credentials(prompt, email).await?;
    let user = Login::new(deps.auth_api.clone(), deps.session_store.clone())
        .execute(&email, password)
        .await?;
    prompt.say(&format!("Signed in as {} <{}>.", user.full_name, user.email));
    Ok(())
}

pub async fn admin_login<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    email: Option<String>,
) -> anyhow::Result<()> {
    let (email, password) = credentials(prompt, email).await?;
    let admin = AdminLogin::new(deps.auth_api.clone(), deps.session_store.clone())
        .execute(&email, password)
        .await?;
    prompt.say(&format!("Signed in to the admin area as {}.", admin.email));
    Ok(())
}

pub async fn logout<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    Logout::new(deps.session_store.clone()).execute().await?;
    prompt.say("Signed out.");
    Ok(())
}

pub async fn whoami<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    let snapshot = CurrentSession::new(deps.session_store.clone())
        .snapshot()
        .await?;
    match &snapshot.user {
        Some(user) => prompt.say(&format!(
            "user:  {} <{}> (id {})",
            user.full_name, user.email, user.id
        )),
        None => prompt.say("user:  not signed in"),
    }
    if let Some(admin) = &snapshot.admin {
        prompt.say(&format!("admin: {} (role {})", admin.email, admin.role));
    }
    Ok(())
}
