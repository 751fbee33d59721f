//! Fetch-based transport.
//!
//! Production implementation of the `Transport` seam over `web_sys::fetch`.
//! Converts the platform-neutral request types into browser objects at the
//! last possible moment; multipart payloads become `FormData` so the browser
//! picks the boundary and content type itself.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

use async_trait::async_trait;

use crate::client::{ApiRequest, ApiResponse, FormValue, RequestPayload, Transport};
use crate::error::ClientError;

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn build_form_data(fields: &[(String, FormValue)]) -> Result<FormData, ClientError> {
    let form = FormData::new().map_err(|e| ClientError::transport(js_detail(e)))?;

    for (name, value) in fields {
        match value {
            FormValue::Text(text) => {
                form.append_with_str(name, text)
                    .map_err(|e| ClientError::transport(js_detail(e)))?;
            }
            FormValue::File {
                filename,
                mime,
                bytes,
            } => {
                let parts = js_sys::Array::new();
                parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));

                let options = BlobPropertyBag::new();
                options.set_type(mime);

                let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                    .map_err(|e| ClientError::transport(js_detail(e)))?;

                form.append_with_blob_and_filename(name, &blob, filename)
                    .map_err(|e| ClientError::transport(js_detail(e)))?;
            }
        }
    }

    Ok(form)
}

/// Single-shot fetch transport. A hung request hangs indefinitely from this
/// layer's perspective: no timeout, no retry.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let headers = Headers::new().map_err(|e| ClientError::transport(js_detail(e)))?;
        for (key, value) in &request.headers {
            headers
                .set(key, value)
                .map_err(|e| ClientError::transport(js_detail(e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_headers(&headers.into());

        match &request.payload {
            Some(RequestPayload::Json(value)) => {
                opts.set_body(&JsValue::from_str(&value.to_string()));
            }
            Some(RequestPayload::Multipart(form)) => {
                let form_data = build_form_data(&form.fields)?;
                opts.set_body(form_data.as_ref());
            }
            None => {}
        }

        let js_request = Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|e| ClientError::transport(js_detail(e)))?;

        let window = web_sys::window()
            .ok_or_else(|| ClientError::transport("no window object available"))?;

        let response_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| ClientError::transport(js_detail(e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|e| ClientError::transport(js_detail(e)))?;

        let status = response.status();

        let text_promise = response
            .text()
            .map_err(|e| ClientError::transport(js_detail(e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| ClientError::transport(js_detail(e)))?;

        Ok(ApiResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
