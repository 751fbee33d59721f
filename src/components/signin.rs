use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{sign_in, use_auth};
use crate::web::router::use_router;

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Completa todos los campos".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match sign_in(&auth, email.get_untracked(), password.get_untracked()).await {
                Ok(_) => router.navigate("/products"),
                Err(_) => {
                    set_error_msg.set(Some("No se pudo iniciar sesión".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Iniciar sesión"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

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
                            <button type="submit" class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting.get() { "Entrando..." } else { "Entrar" }}
                            </button>
                        </div>

                        <a class="link link-hover text-sm" on:click=move |_| router.navigate("/signup")>
                            "¿No tienes cuenta? Regístrate"
                        </a>
                    </form>
                </div>
            </div>
        </div>
    }
}
