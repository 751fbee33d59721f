use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::client::{AdminApi, FormPayload};
use crate::services::categories::{create_category, delete_category, get_all_categories};

#[component]
pub fn CategoryListPage() -> impl IntoView {
    let (items, set_items) = signal(Option::<Value>::None);
    let (version, set_version) = signal(0u32);
    let (name, set_name) = signal(String::new());

    Effect::new(move |_| {
        version.get();
        spawn_local(async move {
            if let Ok(body) = get_all_categories(&AdminApi::new()).await {
                set_items.set(Some(body));
            }
        });
    });

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let form = FormPayload::new().text("name", name.get_untracked());
            if create_category(&AdminApi::new(), form).await.is_ok() {
                set_name.set(String::new());
                set_version.update(|v| *v += 1);
            }
        });
    };

    let rows = move || {
        items
            .get()
            .as_ref()
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div class="p-6 max-w-3xl mx-auto">
            <h1 class="text-2xl font-bold mb-4">"Categorías"</h1>

            <form class="flex gap-2 mb-6" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Nombre de la categoría"
                    class="input input-bordered flex-1"
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=name
                    required
                />
                <button type="submit" class="btn btn-primary">"Crear"</button>
            </form>

            <ul class="menu bg-base-100 rounded-box shadow">
                {move || {
                    rows()
                        .into_iter()
                        .map(|item| {
                            let id = item.get("id").and_then(Value::as_u64).unwrap_or_default();
                            let label = item
                                .get("name")
                                .and_then(Value::as_str)
                                .unwrap_or("(sin nombre)")
                                .to_string();
                            view! {
                                <li class="flex flex-row items-center justify-between">
                                    <span>{label}</span>
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        on:click=move |_| {
                                            spawn_local(async move {
                                                if delete_category(&AdminApi::new(), id).await.is_ok() {
                                                    set_version.update(|v| *v += 1);
                                                }
                                            });
                                        }
                                    >
                                        "Eliminar"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
