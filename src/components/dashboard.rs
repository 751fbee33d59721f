use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::client::AdminApi;
use crate::services::orders::get_orders;
use crate::web::router::use_router;

/// Dashboard view, mounted under `/calendar`. Shows the order feed.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let router = use_router();
    let (orders, set_orders) = signal(Option::<Value>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(body) = get_orders(&AdminApi::new()).await {
                set_orders.set(Some(body));
            }
        });
    });

    let rows = move || {
        orders
            .get()
            .as_ref()
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div class="p-6 max-w-3xl mx-auto">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">"Pedidos"</h1>
                <div class="flex gap-2">
                    <button class="btn btn-sm" on:click=move |_| router.navigate("/products")>
                        "Productos"
                    </button>
                    <button class="btn btn-sm" on:click=move |_| router.navigate("/categories")>
                        "Categorías"
                    </button>
                    <button class="btn btn-sm" on:click=move |_| router.navigate("/profile")>
                        "Perfil"
                    </button>
                </div>
            </div>

            <ul class="menu bg-base-100 rounded-box shadow">
                {move || {
                    rows()
                        .into_iter()
                        .map(|order| {
                            let id = order.get("id").and_then(Value::as_u64).unwrap_or_default();
                            let total = order
                                .get("total")
                                .map(|v| v.to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <li class="flex flex-row justify-between">
                                    <span>{format!("Pedido #{}", id)}</span>
                                    <span class="text-base-content/70">{total}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
