use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;

use super::{auth, categories, orders, products};
use crate::client::{
    ApiClient, ApiRequest, ApiResponse, FormPayload, FormValue, HttpMethod, RequestPayload,
    Transport,
};
use crate::error::ClientError;
use crate::session::tests::MemoryStore;
use crate::session::{Session, TOKEN_KEY, USER_KEY};

// =========================================================
// Shared mock transport
// =========================================================

struct TestContext {
    /// Every request the client dispatched, in order.
    requests: RefCell<Vec<ApiRequest>>,
    /// Scripted outcomes, consumed front to back. Empty queue means 200 "{}".
    responses: RefCell<VecDeque<Result<ApiResponse, ClientError>>>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
        }
    }

    fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    fn fail_transport(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::transport(message)));
    }

    fn request(&self, index: usize) -> ApiRequest {
        self.requests.borrow()[index].clone()
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

struct MockTransport {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        self.ctx.requests.borrow_mut().push(request);
        self.ctx
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            })
    }
}

const TEST_BASE: &str = "http://api.test";

fn setup() -> (
    Rc<TestContext>,
    Session<MemoryStore>,
    ApiClient<MockTransport, MemoryStore>,
) {
    let ctx = Rc::new(TestContext::new());
    let store = MemoryStore::default();
    let session = Session::new(store.clone());
    let client = ApiClient::with_parts(
        MockTransport { ctx: ctx.clone() },
        Session::new(store),
        TEST_BASE,
    );
    (ctx, session, client)
}

// =========================================================
// Pass-through and error propagation
// =========================================================

#[tokio::test]
async fn get_all_products_returns_body_unmodified() {
    let (ctx, _, client) = setup();
    ctx.respond(200, r#"[{"id":1,"name":"Teclado"},{"id":2,"name":"Mouse"}]"#);

    let body = products::get_all_products(&client).await.unwrap();

    assert_eq!(
        body,
        json!([{"id":1,"name":"Teclado"},{"id":2,"name":"Mouse"}])
    );
    let request = ctx.request(0);
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "http://api.test/products");
}

#[tokio::test]
async fn delete_product_issues_delete_on_resource_path() {
    let (ctx, _, client) = setup();
    ctx.respond(200, r#"{"deleted":true}"#);

    let body = products::delete_product(&client, 42).await.unwrap();

    assert_eq!(body, json!({"deleted": true}));
    let request = ctx.request(0);
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.url, "http://api.test/products/42");
}

#[tokio::test]
async fn delete_product_reraises_404_unchanged() {
    let (ctx, _, client) = setup();
    ctx.respond(404, r#"{"message":"No encontrado"}"#);

    let err = products::delete_product(&client, 42).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err, ClientError::api(404, r#"{"message":"No encontrado"}"#));
}

#[tokio::test]
async fn transport_failure_propagates_to_caller() {
    let (ctx, _, client) = setup();
    ctx.fail_transport("connection refused");

    let err = orders::get_orders(&client).await.unwrap_err();

    assert_eq!(err, ClientError::transport("connection refused"));
    assert_eq!(err.status(), None);
}

// =========================================================
// Encoding conventions
// =========================================================

#[tokio::test]
async fn create_product_returns_raw_response() {
    let (ctx, _, client) = setup();
    ctx.respond(201, r#"{"id":9}"#);

    let form = FormPayload::new()
        .text("name", "Monitor")
        .file("image", "monitor.png", "image/png", vec![0x89, 0x50]);
    let response = products::create_product(&client, form.clone())
        .await
        .unwrap();

    // Raw response object, not the unwrapped body.
    assert_eq!(response.status, 201);
    assert_eq!(response.body, r#"{"id":9}"#);
    assert_eq!(response.json(), json!({"id": 9}));

    let request = ctx.request(0);
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://api.test/products");
    assert_eq!(request.payload, Some(RequestPayload::Multipart(form)));
    // Multipart leaves the content type to the browser.
    assert_eq!(request.header("Content-Type"), None);
}

#[tokio::test]
async fn update_category_posts_multipart_to_resource_path() {
    let (ctx, _, client) = setup();
    ctx.respond(200, r#"{"id":3,"name":"Ofertas"}"#);

    let form = FormPayload::new().text("name", "Ofertas");
    let body = categories::update_category(&client, 3, form).await.unwrap();

    assert_eq!(body, json!({"id": 3, "name": "Ofertas"}));
    let request = ctx.request(0);
    // Update travels over POST, never PUT.
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://api.test/categories/3");
    assert!(matches!(
        request.payload,
        Some(RequestPayload::Multipart(_))
    ));
}

#[tokio::test]
async fn create_order_sends_json_with_content_type() {
    let (ctx, _, client) = setup();
    ctx.respond(200, r#"{"id":5}"#);

    let data = json!({"product_id": 1, "quantity": 2});
    let body = orders::create_order(&client, data.clone()).await.unwrap();

    assert_eq!(body, json!({"id": 5}));
    let request = ctx.request(0);
    assert_eq!(request.url, "http://api.test/orders");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.payload, Some(RequestPayload::Json(data)));
}

#[tokio::test]
async fn form_payload_preserves_field_order() {
    let form = FormPayload::new()
        .text("name", "Silla")
        .text("price", "120")
        .file("image", "silla.jpg", "image/jpeg", vec![1, 2, 3]);

    assert_eq!(form.fields.len(), 3);
    assert_eq!(
        form.fields[0],
        ("name".to_string(), FormValue::Text("Silla".to_string()))
    );
    assert!(matches!(form.fields[2].1, FormValue::File { .. }));
}

// =========================================================
// Bearer token hook
// =========================================================

#[tokio::test]
async fn token_in_session_is_attached_to_every_request() {
    let (ctx, session, client) = setup();
    session.set_token("tok-123");
    ctx.respond(200, "[]");
    ctx.respond(200, "[]");

    products::get_all_products(&client).await.unwrap();
    categories::get_all_categories(&client).await.unwrap();

    for index in 0..ctx.request_count() {
        assert_eq!(
            ctx.request(index).header("Authorization"),
            Some("Bearer tok-123")
        );
    }
}

#[tokio::test]
async fn missing_token_omits_authorization_header() {
    let (ctx, _, client) = setup();
    ctx.respond(200, "[]");

    products::get_all_products(&client).await.unwrap();

    assert_eq!(ctx.request(0).header("Authorization"), None);
}

// =========================================================
// Auth service
// =========================================================

#[tokio::test]
async fn login_stores_user_record_and_returns_body() {
    let (ctx, session, client) = setup();
    ctx.respond(200, r#"{"id":1,"name":"A"}"#);

    let body = auth::login(&client, json!({"email": "a@b.c", "password": "x"}))
        .await
        .unwrap();

    assert_eq!(body, json!({"id": 1, "name": "A"}));
    assert_eq!(session.user_raw().as_deref(), Some(r#"{"id":1,"name":"A"}"#));
    // No token field in the body, so none is persisted and later requests
    // go out unauthenticated.
    assert!(session.token().is_none());

    let request = ctx.request(0);
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "http://api.test/login");
}

#[tokio::test]
async fn login_persists_bearer_token_from_body() {
    let (ctx, session, client) = setup();
    ctx.respond(200, r#"{"id":1,"name":"A","token":"tok-9"}"#);
    ctx.respond(200, "[]");

    auth::login(&client, json!({"email": "a@b.c", "password": "x"}))
        .await
        .unwrap();

    assert_eq!(session.token().as_deref(), Some("tok-9"));

    // Downstream requests now carry the bearer header.
    products::get_all_products(&client).await.unwrap();
    assert_eq!(ctx.request(1).header("Authorization"), Some("Bearer tok-9"));
}

#[tokio::test]
async fn failed_login_reraises_and_leaves_session_empty() {
    let (ctx, session, client) = setup();
    ctx.respond(401, r#"{"message":"Credenciales invalidas"}"#);

    let err = auth::login(&client, json!({"email": "a@b.c", "password": "bad"}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(session.user_raw().is_none());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn register_has_no_session_side_effect() {
    let (ctx, session, client) = setup();
    ctx.respond(200, r#"{"id":2}"#);

    let body = auth::register(&client, json!({"email": "n@b.c", "password": "x"}))
        .await
        .unwrap();

    assert_eq!(body, json!({"id": 2}));
    assert!(session.user_raw().is_none());
    assert_eq!(ctx.request(0).url, "http://api.test/register");
}

#[tokio::test]
async fn logout_returns_body_and_clears_session() {
    let (ctx, session, client) = setup();
    session.set_user(&json!({"id": 1}));
    session.set_token("tok-1");
    ctx.respond(200, r#"{"message":"bye"}"#);

    let body = auth::logout(&client).await;

    assert_eq!(body, Some(json!({"message": "bye"})));
    assert!(session.user_raw().is_none());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn logout_never_raises_and_still_clears_session() {
    let (ctx, session, client) = setup();
    session.set_user(&json!({"id": 1}));
    session.set_token("tok-1");
    ctx.fail_transport("connection reset");

    let body = auth::logout(&client).await;

    assert_eq!(body, None);
    // Best-effort teardown: credentials are gone even when the server was
    // unreachable.
    assert!(session.user_raw().is_none());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn logout_request_carries_existing_token() {
    let (ctx, session, client) = setup();
    session.set_user(&json!({"id": 1}));
    session.set_token("tok-1");
    ctx.respond(200, "{}");

    auth::logout(&client).await;

    let request = ctx.request(0);
    assert_eq!(request.url, "http://api.test/logout");
    assert_eq!(request.header("Authorization"), Some("Bearer tok-1"));
}

// =========================================================
// Session key layout
// =========================================================

#[tokio::test]
async fn session_key_layout_matches_storage_contract() {
    let (_, session, client) = setup();

    auth::login(&client, json!({"email": "a@b.c", "password": "x"}))
        .await
        .unwrap();

    // The client's own session sees both keys under their fixed names.
    let inner = client.session();
    assert_eq!(USER_KEY, "user");
    assert_eq!(TOKEN_KEY, "auth_token");
    assert!(inner.is_logged_in());
    assert_eq!(session.user_raw(), inner.user_raw());
}
