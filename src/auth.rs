use crate::errors::AppError;
use crate::state::AppState;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use uuid::Uuid;

/// Derives a stable user id from the login name so a returning user reaches
/// the same document.
pub fn user_id_from_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

pub async fn issue_session(state: &AppState, user_id: String) -> String {
    let token = Uuid::new_v4().to_string();
    state.sessions.lock().await.insert(token.clone(), user_id);
    token
}

pub async fn drop_session(state: &AppState, headers: &HeaderMap) {
    if let Some(token) = bearer_token(headers) {
        state.sessions.lock().await.remove(token);
    }
}

pub async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    let token =
        bearer_token(headers).ok_or_else(|| AppError::unauthorized("missing bearer token"))?;
    state
        .sessions
        .lock()
        .await
        .get(token)
        .cloned()
        .ok_or_else(|| AppError::unauthorized("unknown or expired session"))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION)?.to_str().ok()?.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_is_stable_across_case_and_spacing() {
        assert_eq!(user_id_from_name("Alice"), user_id_from_name("  alice "));
        assert_eq!(user_id_from_name("Jin Park"), "jin-park");
    }
}
