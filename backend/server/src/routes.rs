use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use menu::{Constraints, MenuItem, filter};
use serde::Serialize;

use crate::{
    error::AppError,
    state::AppState,
    utils::{MenuQuery, parse_id},
};

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

pub async fn menu_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::MalformedQuery(e.body_text()))?;
    let constraints = Constraints::try_from(query)?;

    let filtered = filter(&state.catalog, &constraints);

    Ok(Json(ListResponse::<&MenuItem> {
        success: true,
        count: filtered.count,
        data: filtered.items,
    })
    .into_response())
}

pub async fn item_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id)?;
    let item = state.catalog.get(id).ok_or(AppError::NotFound)?;

    Ok(DataResponse::ok(item).into_response())
}

pub async fn categories_handler(State(state): State<Arc<AppState>>) -> Response {
    DataResponse::ok(state.catalog.categories()).into_response()
}

pub async fn cuisines_handler(State(state): State<Arc<AppState>>) -> Response {
    DataResponse::ok(state.catalog.cuisines()).into_response()
}

pub async fn missing_item_handler() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found_page() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404 - File Not Found</h1>"))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, header},
    };
    use http_body_util::BodyExt;
    use menu::{Catalog, sample_items};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{config::Config, router};

    use super::*;

    fn app() -> Router {
        let config = Config {
            static_dir: "does-not-exist".into(),
            ..Default::default()
        };

        router(AppState::with_catalog(Catalog::sample().unwrap(), config))
    }

    async fn send(method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        app().oneshot(request).await.unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = send(Method::GET, uri).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(body: &Value) -> Vec<&str> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_without_constraints() {
        let expected = serde_json::to_value(sample_items()).unwrap();

        for uri in ["/api", "/api/", "/api/menu", "/api/items"] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], json!(true));
            assert_eq!(body["count"], json!(15));
            assert_eq!(body["data"], expected);
        }
    }

    #[tokio::test]
    async fn test_list_combined_constraints() {
        let (status, body) = get_json("/api?category=Main%20Course&cuisine=Indian").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(3));
        assert_eq!(
            names(&body),
            vec!["Chicken Biryani", "Butter Chicken", "Tandoori Chicken"]
        );
    }

    #[tokio::test]
    async fn test_list_name_case_insensitive() {
        for uri in ["/api/menu?name=biryani", "/api/menu?name=BIRYANI"] {
            let (_, body) = get_json(uri).await;

            assert_eq!(names(&body), vec!["Chicken Biryani"]);
        }
    }

    #[tokio::test]
    async fn test_list_price_range_inclusive() {
        let (_, body) = get_json("/api/items?minPrice=22&maxPrice=28").await;

        assert_eq!(
            names(&body),
            vec!["Chicken Biryani", "Pizza Margherita", "Butter Chicken"]
        );
    }

    #[tokio::test]
    async fn test_list_availability_and_servings() {
        let (_, body) = get_json("/api?availability=false&minServings=2").await;

        assert_eq!(
            names(&body),
            vec!["Caesar Salad", "Tiramisu", "Tandoori Chicken"]
        );

        let (_, body) = get_json("/api?availability=maybe&maxServings=2").await;
        assert_eq!(names(&body), vec!["Caesar Salad", "Tandoori Chicken"]);
    }

    #[tokio::test]
    async fn test_list_no_match() {
        let (status, body) = get_json("/api?cuisine=Mexican").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_list_non_numeric_bound() {
        let (status, body) = get_json("/api?maxPrice=lots").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].as_str().unwrap().contains("maxPrice"));
    }

    #[tokio::test]
    async fn test_list_duplicate_param() {
        let (status, body) = get_json("/api?name=a&name=b").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_item_by_id() {
        let expected = serde_json::to_value(&sample_items()[3]).unwrap();

        for uri in ["/api/menu/4", "/api/items/4"] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "success": true, "data": expected.clone() }));
        }
    }

    #[tokio::test]
    async fn test_item_unknown_id() {
        for uri in ["/api/menu/9999", "/api/items/abc", "/api/menu/0"] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(
                body,
                json!({ "success": false, "message": "Menu item not found" })
            );
        }
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) = get_json("/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "data": ["Main Course", "Appetizer", "Dessert"] })
        );
    }

    #[tokio::test]
    async fn test_cuisines() {
        let (_, body) = get_json("/api/cuisines").await;

        assert_eq!(
            body["data"],
            json!(["Indian", "Italian", "Continental", "Chinese"])
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let cases = [
            (Method::POST, "/api"),
            (Method::PUT, "/api/menu"),
            (Method::DELETE, "/api/items/1"),
            (Method::PATCH, "/api/categories"),
            (Method::POST, "/api/cuisines"),
        ];

        for (method, uri) in cases {
            let response = send(method, uri).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                body,
                json!({ "success": false, "message": "Method not allowed" })
            );
        }
    }

    #[tokio::test]
    async fn test_options_answered_by_cors() {
        for uri in ["/api/menu", "/api/items/3", "/index.html"] {
            let response = send(Method::OPTIONS, uri).await;

            assert_eq!(response.status(), StatusCode::OK);
            assert!(
                response
                    .headers()
                    .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
            );

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_item_namespace_stays_json() {
        for uri in ["/api/menu/", "/api/items/", "/api/menu/5/x", "/api/items/4/"] {
            let (status, body) = get_json(uri).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(
                body,
                json!({ "success": false, "message": "Menu item not found" })
            );
        }

        for (method, uri) in [(Method::POST, "/api/items/"), (Method::PUT, "/api/menu/5/x")] {
            let response = send(method, uri).await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                body,
                json!({ "success": false, "message": "Method not allowed" })
            );
        }
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let response = send(Method::GET, "/api/categories").await;

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let response = send(Method::GET, "/api/menu/9999").await;
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_missing_static_file() {
        let response = send(Method::GET, "/missing.css").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<h1>404 - File Not Found</h1>");
    }
}
