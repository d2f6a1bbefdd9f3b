use log::{info, warn};
use crate::client::api::transport::Transport;
use crate::client::api::Api;
use crate::client::error::ClientError;
use crate::client::model::session::Role;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::{AuthForm, Notice, Outcome, Page, Screen};

pub(crate) async fn login<T, S>(api: &Api<T>, store: &mut S, username: &str, password: &str) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    match api.authenticate(username, password).await {
        Ok(auth) => {
            session::save(store, &auth)?;
            Ok(Outcome::redirect(match auth.role {
                Role::Staff => Page::StaffDashboard,
                Role::Customer => Page::CustomerDashboard,
            }))
        }
        Err(ClientError::InvalidCredentials) => Ok(Outcome::show(Screen::Auth(AuthForm::Login))
            .with(Notice::Inline(ClientError::InvalidCredentials.to_string()))),
        Err(e @ ClientError::Storage { .. }) => Err(e),
        Err(e) => {
            warn!("login failed, {}", e);
            Ok(Outcome::show(Screen::Auth(AuthForm::Login))
                .with(Notice::Inline("An error occurred during login.".to_string())))
        }
    }
}

pub(crate) async fn register<T: Transport>(api: &Api<T>, username: &str, password: &str, role: Role) -> Outcome {
    match api.register(username, password, role).await {
        Ok(()) => {
            info!("registered user={} role={}", username, role);
            Outcome::show(Screen::Auth(AuthForm::Login))
                .with(Notice::Alert("Registration successful! Please log in.".to_string()))
        }
        Err(e @ ClientError::UsernameTaken) => {
            Outcome::show(Screen::Auth(AuthForm::Register)).with(Notice::Inline(e.to_string()))
        }
        Err(ClientError::Transport { reason }) => {
            warn!("registration could not reach the server, {}", reason);
            Outcome::show(Screen::Auth(AuthForm::Register))
                .with(Notice::Inline("Could not connect to the server.".to_string()))
        }
        Err(e) => {
            warn!("registration failed, {}", e);
            Outcome::show(Screen::Auth(AuthForm::Register))
                .with(Notice::Inline("An unexpected error occurred.".to_string()))
        }
    }
}

pub(crate) fn logout<S: StateStore>(store: &mut S) -> Result<Outcome, ClientError> {
    let user = session::load(store).and_then(|s| s.username);
    session::invalidate(store)?;
    info!("logged out user={}", user.as_deref().unwrap_or("-"));
    Ok(Outcome::redirect(Page::Login))
}
