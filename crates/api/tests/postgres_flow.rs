//! End-to-end tests against PostgreSQL: submission, duplicate rejection and
//! the aggregation views served from real rows.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_pg_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn app(pool: PgPool) -> axum::Router {
    build_pg_app(pool, std::env::temp_dir().join("admissions-test-backup.json"))
}

async fn submit(pool: &PgPool, name: &str, college: &str, score: f64) -> StatusCode {
    post_json(
        app(pool.clone()),
        "/api/v1/applications",
        json!({"name": name, "college": college, "score": score}),
    )
    .await
    .status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_submission_is_rejected(pool: PgPool) {
    assert_eq!(submit(&pool, "Alice", "MIT", 90.0).await, StatusCode::CREATED);
    assert_eq!(submit(&pool, "Alice", "MIT", 90.0).await, StatusCode::CONFLICT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn colleges_view_over_database_rows(pool: PgPool) {
    for (name, college, score) in [("Bob", "Yale", 70.0), ("Bob", "Harvard", 95.0), ("Carol", "Yale", 80.0)] {
        assert_eq!(submit(&pool, name, college, score).await, StatusCode::CREATED);
    }

    let response = get(app(pool), "/api/v1/colleges").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "Yale": [
                {"name": "Carol", "score": 80.0},
                {"name": "Bob", "score": 70.0}
            ],
            "Harvard": [
                {"name": "Bob", "score": 95.0}
            ]
        })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn applicant_view_and_not_found(pool: PgPool) {
    assert_eq!(submit(&pool, "Dan", "MIT", 60.0).await, StatusCode::CREATED);
    assert_eq!(submit(&pool, "Dan", "Rice", 60.0).await, StatusCode::CREATED);

    let json = body_json(get(app(pool.clone()), "/api/v1/applicants/Dan").await).await;
    assert_eq!(json["name"], "Dan");
    assert_eq!(json["applications"][0]["college"], "MIT");
    assert_eq!(json["applications"][1]["college"], "Rice");

    let response = get(app(pool), "/api/v1/applicants/dan").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_database_reachable(pool: PgPool) {
    let json = body_json(get(app(pool), "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
}
