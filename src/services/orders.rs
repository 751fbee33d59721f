//! Order endpoints. Orders carry no attachments, so both operations are
//! plain JSON.

use serde_json::Value;

use crate::client::{ApiClient, HttpMethod, RequestPayload, Transport};
use crate::error::ClientResult;
use crate::session::SessionStore;

pub async fn get_orders<T, S>(client: &ApiClient<T, S>) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al obtener los pedidos",
            HttpMethod::Get,
            "/orders",
            None,
        )
        .await
}

pub async fn create_order<T, S>(client: &ApiClient<T, S>, data: Value) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al guardar el pedido",
            HttpMethod::Post,
            "/orders",
            Some(RequestPayload::Json(data)),
        )
        .await
}
