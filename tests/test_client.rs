mod common;

use common::{recipe_list_json, recipe_summary_json, TestEnvironment, TEST_API_KEY};
use pretty_assertions::assert_eq;
use recipe_api_cli::client::{build_url, QueryParams, Quantity};
use recipe_api_cli::{IngredientQuery, RecipeApiClient, RecipeApiError, RecipeQuery};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_build_url_skips_missing_params_and_encodes() {
    let mut params = QueryParams::new();
    params
        .push("q", "mac & cheese")
        .push_opt("category", None::<String>)
        .push("page", 2);

    assert_eq!(
        build_url("https://recipe-api.com/", "/api/v1/recipes", Some(&params)),
        "https://recipe-api.com/api/v1/recipes?q=mac%20%26%20cheese&page=2"
    );
}

#[test]
fn test_build_url_without_params() {
    assert_eq!(
        build_url("https://recipe-api.com", "/api/v1/cuisines", None),
        "https://recipe-api.com/api/v1/cuisines"
    );

    let empty = QueryParams::new();
    assert_eq!(empty.defined().count(), 0);
    assert_eq!(
        build_url("https://recipe-api.com", "/api/v1/cuisines", Some(&empty)),
        "https://recipe-api.com/api/v1/cuisines"
    );
}

#[test]
fn test_recipe_query_params_in_order() {
    let query = RecipeQuery {
        cuisine: Some("Italian".to_string()),
        max_calories: Some(500),
        page: Some(1),
        per_page: Some(10),
        ..Default::default()
    };

    let params = query.to_params();
    let sent: Vec<(&str, &str)> = params.defined().collect();
    assert_eq!(
        sent,
        vec![
            ("cuisine", "Italian"),
            ("max_calories", "500"),
            ("page", "1"),
            ("per_page", "10")
        ]
    );
}

#[test]
fn test_logging_captures_crate_debug_events() {
    common::init_test_logging();
    common::init_test_logging();

    assert!(tracing::dispatcher::has_been_set());
    assert!(tracing::enabled!(target: "recipe_api_cli::client", tracing::Level::DEBUG));
}

#[tokio::test]
async fn test_sends_api_key_and_accept_headers() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cuisines"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "name": "Italian", "count": 240 }]
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let cuisines = env.client.list_cuisines().await.expect("request should succeed");
    assert_eq!(cuisines.data.len(), 1);
    assert_eq!(cuisines.data[0].name, "Italian");
}

#[tokio::test]
async fn test_list_recipes_passes_query_parameters() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("q", "quick dinner"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_list_json(
            vec![recipe_summary_json("r_1", "Margherita Pizza")],
            6,
            2,
            5,
        )))
        .expect(1)
        .mount(&env.server)
        .await;

    let response = env
        .client
        .list_recipes(&RecipeQuery {
            q: Some("quick dinner".to_string()),
            page: Some(2),
            per_page: Some(5),
            ..Default::default()
        })
        .await
        .expect("request should succeed");

    assert_eq!(response.meta.total, 6);
    assert_eq!(response.meta.total_pages(), 2);
    assert_eq!(response.data[0].meta.total_time, "PT45M");
}

#[tokio::test]
async fn test_list_ingredients() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ingredients"))
        .and(query_param("category", "Vegetables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "ing_1", "name": "Tomato", "category": "Vegetables", "source": "USDA" }],
            "meta": { "total": 1, "page": 1, "per_page": 20, "total_capped": false }
        })))
        .mount(&env.server)
        .await;

    let response = env
        .client
        .list_ingredients(&IngredientQuery {
            category: Some("Vegetables".to_string()),
            ..Default::default()
        })
        .await
        .expect("request should succeed");

    assert_eq!(response.data[0].id, "ing_1");
    assert_eq!(response.meta.total_capped, Some(false));
}

#[tokio::test]
async fn test_get_recipe_decodes_full_recipe() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes/r_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::full_recipe_json("r_42")))
        .mount(&env.server)
        .await;

    let response = env.client.get_recipe("r_42").await.expect("request should succeed");
    let recipe = response.data;

    assert_eq!(recipe.name, "Overnight Focaccia");
    assert_eq!(recipe.ingredients[0].items[0].quantity, Quantity::Number(500.0));
    assert_eq!(
        recipe.ingredients[1].items[0].quantity,
        Quantity::Text("to taste".to_string())
    );
    assert_eq!(recipe.nutrition.per_serving.fiber_g, Some(1.6));
    assert_eq!(response.usage.map(|u| u.daily_remaining), Some(480));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let env = TestEnvironment::with_key(None).await;

    let err = env.client.list_dietary_flags().await.unwrap_err();

    assert!(matches!(err, RecipeApiError::MissingApiKey));
    assert!(err.is_fatal());
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test]
async fn test_empty_api_key_counts_as_missing() {
    let env = TestEnvironment::with_key(Some("")).await;

    let err = env.client.list_cuisines().await.unwrap_err();
    assert!(matches!(err, RecipeApiError::MissingApiKey));
}

#[tokio::test]
async fn test_malformed_api_key_makes_no_request() {
    let env = TestEnvironment::with_key(Some("sk_live_nope")).await;

    let err = env.client.list_cuisines().await.unwrap_err();

    assert!(matches!(err, RecipeApiError::InvalidApiKeyFormat));
    assert_eq!(err.to_string(), "Invalid API key format!");
    assert_eq!(env.request_count().await, 0);
}

async fn error_for_status(status: u16, body: &str) -> RecipeApiError {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/dietary-flags"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&env.server)
        .await;

    env.client.list_dietary_flags().await.unwrap_err()
}

#[tokio::test]
async fn test_unauthorized() {
    let err = error_for_status(401, r#"{"error":{"code":"INVALID_KEY","message":"bad key"}}"#).await;

    assert!(matches!(err, RecipeApiError::Unauthorized));
    assert_eq!(err.status(), Some(401));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_forbidden() {
    let err = error_for_status(403, "").await;
    assert!(matches!(err, RecipeApiError::Forbidden));
    assert_eq!(err.code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_rate_limited() {
    let err = error_for_status(429, "").await;
    assert!(matches!(err, RecipeApiError::RateLimited));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_not_found_is_recoverable() {
    let err = error_for_status(404, "").await;

    assert!(matches!(err, RecipeApiError::NotFound));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.code(), "NOT_FOUND");
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_other_status_keeps_truncated_body() {
    let body = "x".repeat(800);
    let err = error_for_status(502, &body).await;

    match &err {
        RecipeApiError::Api { status, body } => {
            assert_eq!(*status, 502);
            assert_eq!(body.chars().count(), 500);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "API error (502)!");
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cuisines"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&env.server)
        .await;

    let err = env.client.list_cuisines().await.unwrap_err();
    assert!(matches!(err, RecipeApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = RecipeApiClient::new("http://127.0.0.1:1".to_string(), Some(TEST_API_KEY.to_string()));

    let err = client.list_cuisines().await.unwrap_err();

    assert!(matches!(err, RecipeApiError::Network(_)));
    assert!(err.hints().iter().any(|h| h.contains("internet connection")));
}
