//! Tienda admin frontend.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: route table and guarded navigation
//! - `session` / `client`: session context and the HTTP wrapper
//! - `services`: per-resource endpoint mappings
//! - `auth`: reactive auth state
//! - `components`: thin views

mod auth;
pub mod client;
pub mod error;
pub mod services;
pub mod session;

mod components {
    pub mod categories;
    pub mod dashboard;
    pub mod products;
    pub mod profile;
    pub mod signin;
    pub mod signup;
}

pub(crate) mod web;

use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::categories::CategoryListPage;
use crate::components::dashboard::DashboardPage;
use crate::components::products::ProductListPage;
use crate::components::profile::ProfilePage;
use crate::components::signin::SigninPage;
use crate::components::signup::SignupPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Signin => view! { <SigninPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Products => view! { <ProductListPage /> }.into_any(),
        AppRoute::Calendar => view! { <DashboardPage /> }.into_any(),
        AppRoute::Categories => view! { <CategoryListPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // Seed auth state from the tab's session storage.
    init_auth(&auth_ctx);

    let is_logged_in = auth_ctx.is_logged_in_signal();

    view! {
        <Router is_logged_in=is_logged_in>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
