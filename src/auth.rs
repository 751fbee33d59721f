//! Reactive auth state.
//!
//! Bridges the session context to the UI and the router: views call
//! `sign_in`/`sign_out`, the router watches the injected logged-in signal.
//! The check is purely local presence of the session user record; no server
//! round-trip validates it.

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::client::AdminApi;
use crate::error::ClientResult;
use crate::services;
use crate::session::Session;

/// Auth state snapshot.
#[derive(Clone, Default)]
pub struct AuthState {
    /// Login response body, as the API returned it.
    pub user: Option<Value>,
    pub is_logged_in: bool,
}

/// Read/write signals shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Logged-in signal for injection into the router.
    pub fn is_logged_in_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_logged_in)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Seeds the auth state from the tab's session storage, so a reload within
/// the same tab keeps the user signed in.
pub fn init_auth(ctx: &AuthContext) {
    let session = Session::default();
    let user = session.user();
    ctx.set_state.update(|state| {
        state.is_logged_in = user.is_some();
        state.user = user;
    });
}

/// Posts credentials and, on success, reflects the new session in the auth
/// state. The session side effects (user record, bearer token) happen in the
/// auth service.
pub async fn sign_in(ctx: &AuthContext, email: String, password: String) -> ClientResult<Value> {
    let client = AdminApi::new();
    let body = services::auth::login(&client, json!({"email": email, "password": password})).await?;

    ctx.set_state.update(|state| {
        state.user = Some(body.clone());
        state.is_logged_in = true;
    });

    Ok(body)
}

/// Best-effort logout. The session is always cleared; the router notices the
/// dropped state and redirects to sign-in on its own.
pub async fn sign_out(ctx: &AuthContext) {
    let client = AdminApi::new();
    services::auth::logout(&client).await;

    ctx.set_state.update(|state| {
        state.user = None;
        state.is_logged_in = false;
    });
}
