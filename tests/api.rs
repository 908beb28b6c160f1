use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use nutrisathi::{app::build_app, config::AppConfig, dishes::Catalog, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(seed_demo_meals: bool) -> Router {
    let config = AppConfig {
        seed_demo_meals,
        ..AppConfig::default()
    };
    let state = AppState::from_parts(Catalog::builtin().expect("catalog"), config).expect("state");
    build_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(false), Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn searches_and_scales_dishes() {
    let app = app(false);

    let (status, body) = send(&app, Method::GET, "/api/v1/dishes?q=salmon", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "6");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/dishes/1/scale",
        Some(json!({ "serving_size": 150 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calories"], 248.0);
    assert_eq!(body["protein"], 46.5);
    assert_eq!(body["fat"], 5.4);
    assert_eq!(body["unit"], "g");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/dishes/1/scale",
        Some(json!({ "serving_size": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/v1/dishes/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "dish 99 not found");
}

#[tokio::test]
async fn logs_lists_and_removes_meals() {
    let app = app(false);

    let (status, meal) = send(
        &app,
        Method::POST,
        "/api/v1/meals",
        Some(json!({ "dish_id": "1", "serving_size": 150, "date": "2024-01-20" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(meal["calories"], 248.0);
    assert_eq!(meal["date"], "2024-01-20");
    let id = meal["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, Method::GET, "/api/v1/meals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/meals/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, meal);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/meals/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/meals/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, Method::GET, "/api/v1/meals", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_unknown_dish_and_bad_serving() {
    let app = app(false);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/meals",
        Some(json!({ "dish_id": "nope", "serving_size": 100, "date": "2024-01-20" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/meals",
        Some(json!({ "dish_id": "1", "serving_size": -5, "date": "2024-01-20" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn filters_meals_and_history_by_date() {
    let app = app(true);

    let (_, exact) = send(&app, Method::GET, "/api/v1/meals?date=2024-01-20", None).await;
    assert_eq!(exact.as_array().unwrap().len(), 2);

    let (_, month) = send(&app, Method::GET, "/api/v1/meals?date=2024-01", None).await;
    assert_eq!(month.as_array().unwrap().len(), 5);

    let (status, _) = send(&app, Method::GET, "/api/v1/meals?date=yesterday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, history) = send(&app, Method::GET, "/api/v1/history", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["meal_count"], 5);
    assert_eq!(history["days"][0]["date"], "2024-01-20");
    assert_eq!(history["days"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn analytics_recommendations_and_stats() {
    let app = app(true);

    let (status, analytics) = send(&app, Method::GET, "/api/v1/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["days_logged"], 3);
    assert_eq!(analytics["latest"]["date"], "2024-01-20");
    assert_eq!(analytics["latest"]["progress"]["calories"]["band"], "behind");
    assert_eq!(analytics["goals"]["calories"], 2000.0);

    let (status, recs) = send(&app, Method::GET, "/api/v1/recommendations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recs[0]["dish"]["name"], "Greek Yogurt");
    assert_eq!(recs[0]["match_percent"], 92);

    let (status, stats) = send(&app, Method::GET, "/api/v1/stats?today=2024-01-21", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_meals"], 5);
    assert_eq!(stats["current_streak"], 3);
    assert_eq!(stats["longest_streak"], 3);
    assert_eq!(stats["level"]["xp"], 250);
    assert_eq!(stats["badge"], "Beginner");
    assert_eq!(stats["milestones"].as_array().unwrap().len(), 5);
    assert_eq!(stats["milestones"][0]["days_to_go"], 4);
    assert_eq!(stats["milestones"][4]["reward_xp"], 2000);
    assert_eq!(stats["achievements"][0]["title"], "First Steps");
    assert_eq!(stats["achievements"][0]["unlocked"], true);
    assert_eq!(stats["achievements"][1]["progress"], 42);
}
