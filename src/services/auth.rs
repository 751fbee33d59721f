//! Auth endpoints and their session side effects.
//!
//! `login` owns the whole credential handoff: the response body is stored
//! under the `user` key and the bearer token inside it is persisted under
//! its own key, so the pre-request hook actually finds one afterwards.

use serde_json::Value;

use crate::client::{ApiClient, HttpMethod, RequestPayload, Transport};
use crate::error::ClientResult;
use crate::session::SessionStore;

/// Token field of the login response. The API nests nothing: a top-level
/// `token` (or `access_token`) string.
fn extract_token(body: &Value) -> Option<&str> {
    body.get("token")
        .or_else(|| body.get("access_token"))
        .and_then(Value::as_str)
}

/// `POST /login`. On success stores the full response body as the session
/// user record, persists the bearer token when the body carries one, and
/// returns the body.
pub async fn login<T, S>(client: &ApiClient<T, S>, credentials: Value) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    let body = client
        .request(
            "Error al hacer login",
            HttpMethod::Post,
            "/login",
            Some(RequestPayload::Json(credentials)),
        )
        .await?;

    client.session().set_user(&body);
    if let Some(token) = extract_token(&body) {
        client.session().set_token(token);
    }

    Ok(body)
}

/// `POST /register`. No session side effect.
pub async fn register<T, S>(client: &ApiClient<T, S>, data: Value) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error en el registro",
            HttpMethod::Post,
            "/register",
            Some(RequestPayload::Json(data)),
        )
        .await
}

/// `POST /logout`, best-effort: the session (user record and token) is
/// cleared regardless of the outcome, and a failed request is logged by the
/// client layer and swallowed here. Never raises.
pub async fn logout<T, S>(client: &ApiClient<T, S>) -> Option<Value>
where
    T: Transport,
    S: SessionStore,
{
    let result = client
        .request("Error al hacer logout", HttpMethod::Post, "/logout", None)
        .await;

    client.session().clear();

    result.ok()
}
