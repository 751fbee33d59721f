use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::auth::{sign_out, use_auth};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    let display_name = move || {
        auth.state
            .get()
            .user
            .as_ref()
            .and_then(|user| {
                user.get("name")
                    .or_else(|| user.get("user").and_then(|u| u.get("name")))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "(sin nombre)".to_string())
    };

    let on_logout = move |_| {
        spawn_local(async move {
            // The router watches the auth signal and sends us to /signin.
            sign_out(&auth).await;
        });
    };

    view! {
        <div class="p-6 max-w-md mx-auto">
            <h1 class="text-2xl font-bold mb-4">"Perfil"</h1>

            <div class="card bg-base-100 shadow p-4">
                <p class="mb-4">{display_name}</p>
                <button class="btn btn-error btn-outline" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </div>
        </div>
    }
}
