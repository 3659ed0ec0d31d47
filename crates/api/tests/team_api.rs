//! Integration tests for team management on approved projects.

mod common;

use axum::http::StatusCode;
use chrono::{Months, NaiveDate, Utc};
use common::{
    body_json, build_test_app, delete, get, patch_json, post_empty, post_json, professor_token,
    put_json,
};
use serde_json::{json, Value};
use sqlx::PgPool;

use praxis_db::models::application::CreateApplication;
use praxis_db::repositories::ApplicationRepo;

const AUTHOR: i64 = 7;
const PROFESSOR: i64 = 100;

fn months_from_now(months: u32) -> NaiveDate {
    Utc::now().date_naive() + Months::new(months)
}

/// Create an application and approve it as project type 1 (Bachelor
/// thesis: Advisor role 1 unbounded, Member role 2 between 1 and 5).
/// Returns the new project id.
async fn approved_project(pool: &PgPool, app: &axum::Router) -> String {
    let application = ApplicationRepo::create(
        pool,
        AUTHOR,
        &CreateApplication {
            title: "River sensor network".to_string(),
            short_description: "Water quality sensors".to_string(),
            description: "Deploy a sensor network along the river".to_string(),
            deadline: months_from_now(7),
            faculty_ids: vec![1],
            project_type_ids: vec![1],
            problem_type_ids: vec![1],
        },
    )
    .await
    .unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/applications/{}/approve", application.id),
        &professor_token(PROFESSOR),
        json!({
            "project_type_ids": [1],
            "deadline": months_from_now(7).to_string(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

fn members(entries: &[(i64, i64)]) -> Value {
    json!({
        "members": entries
            .iter()
            .map(|(user_id, role_id)| json!({ "user_id": user_id, "role_id": role_id }))
            .collect::<Vec<_>>()
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_team_batch(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(41, 1), (42, 2), (43, 2)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let response = get(app, &format!("/api/v1/projects/{project_id}/team")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_team_rejects_overfilled_role(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    // Member role 2 caps at 5; the sixth entry must fail and the whole
    // batch rolls back.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = get(app, &format!("/api/v1/projects/{project_id}/team")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_team_rejects_role_not_in_type(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    // Lead (role 3) only exists for project type 2.
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(42, 3)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BUSINESS_RULE_VIOLATION");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_member_role(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(42, 2)]),
    )
    .await;

    let response = patch_json(
        app,
        &format!("/api/v1/projects/{project_id}/team/42"),
        &professor_token(PROFESSOR),
        json!({ "role_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role_id"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_member_is_404(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    let response = patch_json(
        app,
        &format!("/api/v1/projects/{project_id}/team/999"),
        &professor_token(PROFESSOR),
        json!({ "role_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_member(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(42, 2), (43, 2)]),
    )
    .await;

    let response = delete(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team/42"),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Removing the same member again is a 404.
    let response = delete(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team/42"),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, &format!("/api/v1/projects/{project_id}/team")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_team_is_frozen_after_start(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let project_id = approved_project(&pool, &app).await;

    put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(42, 2)]),
    )
    .await;
    let response = post_empty(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/start"),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team"),
        &professor_token(PROFESSOR),
        members(&[(43, 2)]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = patch_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/team/42"),
        &professor_token(PROFESSOR),
        json!({ "role_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete(
        app,
        &format!("/api/v1/projects/{project_id}/team/42"),
        &professor_token(PROFESSOR),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
