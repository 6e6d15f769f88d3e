mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use staff_service::domain::staff::models::Role;

#[tokio::test]
async fn test_create_vacation_and_read_it_back() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;
    let user = &app.seeded[&Role::User];

    let created = app
        .post("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "user_id": user.id.to_string(),
            "start_date": "2024-01-10",
            "end_date": "2024-01-20",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(created.status(), StatusCode::CREATED);
    let body: serde_json::Value = created.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Coming");
    assert_eq!(body["data"]["start_date"], "2024-01-10");
    assert_eq!(body["data"]["end_date"], "2024-01-20");

    // Reading it back yields the exact same dates, no silent mutation
    let id = body["data"]["id"].as_str().unwrap();
    let fetched = app
        .get(&format!("/api/vacations/{}", id))
        .bearer_auth(&kadr_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_body: serde_json::Value = fetched.json().await.unwrap();
    assert_eq!(fetched_body["data"]["status"], "Coming");
    assert_eq!(fetched_body["data"]["start_date"], "2024-01-10");
    assert_eq!(fetched_body["data"]["end_date"], "2024-01-20");
    assert_eq!(fetched_body["data"]["user_id"], user.id.to_string());
}

#[tokio::test]
async fn test_create_vacation_mails_the_owner_with_readable_dates() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;
    let user = &app.seeded[&Role::User];

    let response = app
        .post("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "user_id": user.id.to_string(),
            "start_date": "2024-01-10",
            "end_date": "2024-01-20",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let sent = app.mailer.sent().await;
    let mail = sent
        .iter()
        .find(|mail| mail.to == user.email)
        .expect("No vacation mail recorded");
    assert!(mail.html_body.contains("10.01.2024"));
    assert!(mail.html_body.contains("20.01.2024"));
}

#[tokio::test]
async fn test_create_vacation_rejects_end_before_start() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;

    let response = app
        .post("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "user_id": app.seeded[&Role::User].id.to_string(),
            "start_date": "2024-01-20",
            "end_date": "2024-01-10",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_vacation_for_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;

    let response = app
        .post("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "user_id": uuid::Uuid::new_v4().to_string(),
            "start_date": "2024-01-10",
            "end_date": "2024-01-20",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nothing was committed and nothing was mailed
    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_only_kadr_schedules_vacations() {
    let app = TestApp::spawn().await;

    for role in [Role::Admin, Role::Director, Role::User] {
        let token = app.token_for(role).await;
        let response = app
            .post("/api/vacations")
            .bearer_auth(&token)
            .json(&json!({
                "user_id": app.seeded[&Role::User].id.to_string(),
                "start_date": "2024-01-10",
                "end_date": "2024-01-20",
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_update_vacation_overwrites_dates_and_status() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;
    let user = &app.seeded[&Role::User];

    let created = app
        .post("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "user_id": user.id.to_string(),
            "start_date": "2024-01-10",
            "end_date": "2024-01-20",
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let created_body: serde_json::Value = created.json().await.unwrap();
    let id = created_body["data"]["id"].as_str().unwrap();

    let updated = app
        .put("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "id": id,
            "start_date": "2024-02-01",
            "end_date": "2024-02-14",
            "status": "Active",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(updated.status(), StatusCode::OK);
    let updated_body: serde_json::Value = updated.json().await.unwrap();
    assert_eq!(updated_body["data"]["status"], "Active");
    assert_eq!(updated_body["data"]["start_date"], "2024-02-01");
    assert_eq!(updated_body["data"]["end_date"], "2024-02-14");

    // The owner is mailed about the change
    let sent = app.mailer.sent().await;
    assert!(sent
        .iter()
        .any(|mail| mail.to == user.email && mail.html_body.contains("01.02.2024")));
}

#[tokio::test]
async fn test_update_unknown_vacation_is_not_found() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;

    let response = app
        .put("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "start_date": "2024-02-01",
            "end_date": "2024-02-14",
            "status": "Active",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_vacation_rejects_status_outside_the_enum() {
    let app = TestApp::spawn().await;
    let kadr_token = app.token_for(Role::Kadr).await;

    let response = app
        .put("/api/vacations")
        .bearer_auth(&kadr_token)
        .json(&json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "start_date": "2024-02-01",
            "end_date": "2024-02-14",
            "status": "Cancelled",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // The closed enum refuses anything but Coming/Active/Finished
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vacation_roster_is_kadr_only() {
    let app = TestApp::spawn().await;

    let kadr_token = app.token_for(Role::Kadr).await;
    let allowed = app
        .get("/api/vacations")
        .bearer_auth(&kadr_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(allowed.status(), StatusCode::OK);

    let user_token = app.token_for(Role::User).await;
    let denied = app
        .get("/api/vacations")
        .bearer_auth(&user_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}
