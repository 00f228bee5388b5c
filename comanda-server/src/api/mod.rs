//! HTTP API
//!
//! Tenant routes sit behind the identity middleware; registration and the
//! print-client polling endpoint are public. Every response is wrapped in
//! the [`ApiResponse`] envelope.

pub mod health;
pub mod history;
pub mod kitchen;
pub mod orders;
pub mod products;
pub mod public;
pub mod register;
pub mod settings;
pub mod users;

use axum::routing::{get, post, put};
use axum::{Json, Router, middleware};
use shared::error::ApiResponse;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::identity_middleware;
use crate::error::ServiceError;
use crate::state::AppState;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}

pub fn create_router(state: AppState) -> Router {
    let tenant = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/{id}", put(orders::update).delete(orders::remove))
        .route("/orders/{id}/delivered", post(orders::deliver))
        .route("/kitchen", get(kitchen::board))
        .route("/history", get(history::report))
        .route("/users", post(users::create))
        .route("/config", get(settings::show).put(settings::update))
        .route(
            "/restaurant",
            put(settings::set_active).delete(settings::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            identity_middleware,
        ));

    let open = Router::new()
        .route("/register", post(register::register))
        .route("/public/orders/{api_key}", get(public::orders));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", tenant.merge(open))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::pool;
    use crate::services::ledger::OrderLedger;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        let pool = pool().await;
        let state = AppState {
            ledger: OrderLedger::new(pool.clone()),
            pool,
        };
        create_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_as(uri: &str, restaurant_id: i64, user_id: i64) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("x-restaurant-id", restaurant_id.to_string())
            .header("x-user-id", user_id.to_string())
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn register_tenant(app: &Router) -> (i64, i64, String) {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/register",
                &json!({
                    "restaurant": { "name": "La Trattoria" },
                    "admin": { "name": "Ana", "email": "ana@example.com", "password": "secret123" }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        (
            body["data"]["restaurant"]["id"].as_i64().unwrap(),
            body["data"]["admin"]["id"].as_i64().unwrap(),
            body["data"]["restaurant"]["api_key"].as_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn health_answers_without_identity() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn tenant_routes_reject_missing_identity() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/api/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["code"], 1001);
    }

    #[tokio::test]
    async fn register_then_order_through_the_api() {
        let app = app().await;
        let (restaurant_id, user_id, api_key) = register_tenant(&app).await;

        let response = app
            .clone()
            .oneshot(get_as("/api/products", restaurant_id, user_id))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        let product_id = body["data"][0]["id"].as_i64().unwrap();

        let mut request = post_json(
            "/api/orders",
            &json!({
                "consumption": "LOCAL",
                "table_label": "5",
                "products": [product_id, product_id]
            }),
        );
        request
            .headers_mut()
            .insert("x-restaurant-id", restaurant_id.to_string().parse().unwrap());
        request
            .headers_mut()
            .insert("x-user-id", user_id.to_string().parse().unwrap());
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["items"][0]["quantity"], 2);
        // Printing defaults to off, so intake reports it explicitly.
        assert_eq!(body["data"]["print"]["kind"], "disabled");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/public/orders/{api_key}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["count"], 1);
        assert_eq!(body["data"]["restaurant"], "La Trattoria");
    }

    #[tokio::test]
    async fn public_endpoint_rejects_unknown_api_key() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/public/orders/not-a-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["code"], 1004);
    }
}
