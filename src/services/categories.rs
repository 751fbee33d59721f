//! Category endpoints. Same shape as products: multipart create/update
//! (category images), update via POST, create returns the raw response.

use serde_json::Value;

use crate::client::{ApiClient, ApiResponse, FormPayload, HttpMethod, RequestPayload, Transport};
use crate::error::ClientResult;
use crate::session::SessionStore;

pub async fn get_all_categories<T, S>(client: &ApiClient<T, S>) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al obtener las categorias",
            HttpMethod::Get,
            "/categories",
            None,
        )
        .await
}

pub async fn get_category<T, S>(client: &ApiClient<T, S>, id: u64) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al obtener la categoria",
            HttpMethod::Get,
            &format!("/categories/{}", id),
            None,
        )
        .await
}

pub async fn create_category<T, S>(
    client: &ApiClient<T, S>,
    data: FormPayload,
) -> ClientResult<ApiResponse>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request_raw(
            "Error al crear una categoria",
            HttpMethod::Post,
            "/categories",
            Some(RequestPayload::Multipart(data)),
        )
        .await
}

pub async fn update_category<T, S>(
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
            "Error al editar una categoria",
            HttpMethod::Post,
            &format!("/categories/{}", id),
            Some(RequestPayload::Multipart(data)),
        )
        .await
}

pub async fn delete_category<T, S>(client: &ApiClient<T, S>, id: u64) -> ClientResult<Value>
where
    T: Transport,
    S: SessionStore,
{
    client
        .request(
            "Error al eliminar una categoria",
            HttpMethod::Delete,
            &format!("/categories/{}", id),
            None,
        )
        .await
}
