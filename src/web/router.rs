//! Router service.
//!
//! Wraps the History API; every mutation of `window.history` happens in this
//! module. Each navigation attempt runs through the guard rule before the
//! route signal (and therefore the view) updates.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, resolve_navigation};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// replaceState variant, used when no new history entry should appear:
/// popstate guard redirects and the initial-load guard.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Route state plus guard, driven by signals.
///
/// The logged-in check is an injected signal rather than a storage lookup,
/// keeping the router decoupled from how the session is held.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_logged_in: Signal<bool>,
}

impl RouterService {
    fn new(is_logged_in: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_logged_in,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigates to a path, running the guard first.
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        self.apply(target, true);
    }

    fn apply(&self, target: AppRoute, use_push: bool) {
        let logged_in = self.is_logged_in.get_untracked();
        let resolved = resolve_navigation(target, logged_in);

        if resolved != target {
            super::log_error(&format!(
                "[Router] Acceso denegado a {}. Redirigiendo a {}.",
                target, resolved
            ));
        }

        if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// Back/forward buttons go through the guard as well.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_logged_in = self.is_logged_in;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let resolved = resolve_navigation(target, is_logged_in.get_untracked());

            if resolved != target {
                replace_history_state(resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// When the session drops while a protected route is showing (logout,
    /// best-effort or not), redirect to sign-in.
    fn setup_logout_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_logged_in = self.is_logged_in;

        Effect::new(move |_| {
            let logged_in = is_logged_in.get();
            let route = current_route.get_untracked();

            if !logged_in && route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(is_logged_in: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_logged_in);

    router.init_popstate_listener();
    router.setup_logout_redirect();

    // Guard the initial URL too: a deep link into a protected page with no
    // session lands on sign-in.
    router.apply(AppRoute::from_path(&current_path()), false);

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation closure for event handlers.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root. Provides the route context; mount once at the top of App.
#[component]
pub fn Router(
    /// Logged-in signal injected by the auth layer.
    is_logged_in: Signal<bool>,
    /// Child views.
    children: Children,
) -> impl IntoView {
    provide_router(is_logged_in);

    children()
}

/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
