use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::client::AdminApi;
use crate::services;
use crate::web::router::use_router;

#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        spawn_local(async move {
            let data = json!({
                "name": name.get_untracked(),
                "email": email.get_untracked(),
                "password": password.get_untracked(),
            });
            match services::auth::register(&AdminApi::new(), data).await {
                Ok(_) => router.navigate("/signin"),
                Err(_) => set_error_msg.set(Some("No se pudo completar el registro".to_string())),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Crear cuenta"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Nombre"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control mt-4">
                            <button type="submit" class="btn btn-primary">"Registrarse"</button>
                        </div>

                        <a class="link link-hover text-sm" on:click=move |_| router.navigate("/signin")>
                            "¿Ya tienes cuenta? Inicia sesión"
                        </a>
                    </form>
                </div>
            </div>
        </div>
    }
}
