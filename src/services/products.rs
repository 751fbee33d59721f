//! Product endpoints.

use serde_json::Value;

use crate::client::{ApiClient, ApiResponse, FormPayload, HttpMethod, RequestPayload, Transport};
use crate::error::ClientResult;
use crate::session::SessionStore;

pub async fn get_all_products<T, S>(client: &ApiClient<T, S>) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al consultar los productos",
            HttpMethod::Get,
            "/products",
            None,
        )
        .await
}

pub async fn get_product<T, S>(client: &ApiClient<T, S>, id: u64) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al obtener un producto",
            HttpMethod::Get,
            &format!("/products/{}", id),
            None,
        )
        .await
}

/// Multipart because the payload may carry an image. Returns the raw
/// response object, not the unwrapped body.
pub async fn create_product<T, S>(
    client: &ApiClient<T, S>,
    data: FormPayload,
) -> ClientResult<ApiResponse>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request_raw(
            "Error al crear un producto",
            HttpMethod::Post,
            "/products",
            Some(RequestPayload::Multipart(data)),
        )
        .await
}

/// Update goes over POST, not PUT. API convention.
pub async fn update_product<T, S>(
    client: &ApiClient<T, S>,
    id: u64,
    data: FormPayload,
) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al actualizar un producto",
            HttpMethod::Post,
            &format!("/products/{}", id),
            Some(RequestPayload::Multipart(data)),
        )
        .await
}

pub async fn delete_product<T, S>(client: &ApiClient<T, S>, id: u64) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al eliminar un producto",
            HttpMethod::Delete,
            &format!("/products/{}", id),
            None,
        )
        .await
}
