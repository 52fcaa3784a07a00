//! Session probe: asks the backend whether this client is logged in.

use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::state::{Action, User};
use crate::store::Store;

/// What [`auto_login`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Identity was already known; no request was made.
    Skipped,
    LoggedIn(User),
    Anonymous,
}

/// Validate the session and, if it is authenticated, fetch the user summary.
///
/// `Ok(None)` covers an invalid session and any non-2xx answer.
pub async fn check_logged_in(client: &ApiClient) -> Result<Option<User>, ApiError> {
    let validation = client.post_json(endpoints::SESSION, &json!({})).await?;
    if !validation.is_success() {
        return Ok(None);
    }

    let valid = validation
        .field(&["valid"])
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if !valid {
        return Ok(None);
    }

    let Some(user_id) = validation.field(&["user"]).and_then(|v| v.as_u64()) else {
        tracing::warn!("Session reported valid without a user id");
        return Ok(None);
    };

    let path = endpoints::user_summary(user_id);
    let summary = client.get(&path).await?;
    if !summary.is_success() {
        return Ok(None);
    }

    let Some(user) = summary.field(&["user"]) else {
        return Ok(None);
    };
    let user = serde_json::from_value::<User>(user.clone()).map_err(|e| ApiError::Decode {
        url: format!("{}{}", client.base_url(), path),
        source: e,
    })?;
    Ok(Some(user))
}

/// Run the probe once per store and push the result back through dispatch.
///
/// Does nothing if a user is already set or the session was already
/// checked. Any failure leaves the user absent and marks the session
/// checked.
pub async fn auto_login(store: &Store, client: &ApiClient) -> ProbeOutcome {
    if store.state().identity_known() {
        return ProbeOutcome::Skipped;
    }

    match check_logged_in(client).await {
        Ok(Some(user)) => {
            tracing::info!(user_id = user.id, "Session restored");
            store.dispatch(Action::SetUser(Some(user.clone())));
            ProbeOutcome::LoggedIn(user)
        }
        Ok(None) => {
            store.dispatch(Action::SetSessionChecked(true));
            ProbeOutcome::Anonymous
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session probe failed");
            store.dispatch(Action::SetSessionChecked(true));
            ProbeOutcome::Anonymous
        }
    }
}
