use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use bolaquent::auth::{sign_session_token, SessionContext};

mod common;

use common::{body_json, get, post_json, send};

#[tokio::test]
async fn test_health_root() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["database"], "connected");
}

#[tokio::test]
async fn test_health_live() {
    let app = common::create_test_app().await;
    let response = send(&app, get("/health/live", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = common::create_test_app().await;
    let response = send(&app, get("/api/nope", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unauthorized_without_token() {
    let app = common::create_test_app().await;
    let response = send(&app, get("/api/learning/dashboard", None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = common::create_test_app().await;
    let session = SessionContext::ephemeral(3, "Intruder");
    let (token, _) = sign_session_token(&session, "some-other-secret", 60_000).unwrap();

    let response = send(&app, get("/api/learning/dashboard", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, get("/api/learning/dashboard", Some("not.a.token"))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_missing_learner_is_rejected() {
    let app = common::create_test_app().await;
    let session = SessionContext::registered(999, 3, "ghost", None);
    let (token, _) = sign_session_token(&session, common::TEST_SECRET, 60_000).unwrap();

    let response = send(&app, get("/api/learning/dashboard", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_assigns_tier_by_age() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;

    let response = send(&app, get("/api/auth/session", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["tierId"], 3);
    assert_eq!(json["data"]["tierName"], "Elementary");
    assert_eq!(json["data"]["isEphemeral"], false);
    assert_eq!(json["data"]["username"], "ada");
}

#[tokio::test]
async fn test_login_sets_cookie_that_authenticates() {
    let app = common::create_test_app().await;
    let response = send(
        &app,
        post_json("/api/auth/login", None, json!({ "username": "grace", "age": 30 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session_token="));

    let request = Request::builder()
        .uri("/api/auth/session")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let json = body_json(send(&app, request).await).await;
    assert_eq!(json["data"]["tierId"], 6);
}

#[tokio::test]
async fn test_login_requires_age() {
    let app = common::create_test_app().await;
    let response = send(
        &app,
        post_json("/api/auth/login", None, json!({ "username": "noage" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was created for the rejected login.
    let token = common::login(&app, "ada", 8).await;
    let json = body_json(send(&app, get("/api/admin/stats", Some(&token))).await).await;
    assert_eq!(json["data"]["totalUsers"], 1);
}

#[tokio::test]
async fn test_login_requires_username() {
    let app = common::create_test_app().await;
    let response = send(
        &app,
        post_json("/api/auth/login", None, json!({ "username": "  " })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let app = common::create_test_app().await;
    let body = json!({ "username": "lin", "email": "lin@example.com", "age": 12 });

    let first = send(&app, post_json("/api/auth/register", None, body.clone())).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let json = body_json(first).await;
    assert_eq!(json["data"]["session"]["tierId"], 4);

    let again = send(&app, post_json("/api/auth/register", None, body)).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let same_email = send(
        &app,
        post_json(
            "/api/auth/register",
            None,
            json!({ "username": "lin2", "email": "lin@example.com" }),
        ),
    )
    .await;
    assert_eq!(same_email.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_demo_session_tiers() {
    let app = common::create_test_app().await;

    let token = common::demo(&app, Some(6)).await;
    let json = body_json(send(&app, get("/api/auth/session", Some(&token))).await).await;
    assert_eq!(json["data"]["tierId"], 6);
    assert_eq!(json["data"]["isEphemeral"], true);

    let token = common::demo(&app, Some(42)).await;
    let json = body_json(send(&app, get("/api/auth/session", Some(&token))).await).await;
    assert_eq!(json["data"]["tierId"], 3);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = common::create_test_app().await;
    let response = send(&app, post_json("/api/auth/logout", None, json!({}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_submit_accumulates_mastery() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;

    let mut last = json!(null);
    for is_correct in [true, true, false] {
        let response = send(
            &app,
            post_json(
                "/api/learning/practice/submit",
                Some(&token),
                json!({ "word_id": 4, "is_correct": is_correct }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        last = body_json(response).await;
    }

    assert_eq!(
        last,
        json!({ "success": true, "mastery": 66, "attempts": 3, "correct": 2 })
    );
}

#[tokio::test]
async fn test_guest_submit_returns_fixed_values() {
    let app = common::create_test_app().await;
    let token = common::demo(&app, None).await;

    let correct = body_json(
        send(
            &app,
            post_json(
                "/api/learning/practice/submit",
                Some(&token),
                json!({ "word_id": 4, "is_correct": true }),
            ),
        )
        .await,
    )
    .await;
    assert_eq!(
        correct,
        json!({ "success": true, "mastery": 75, "attempts": 3, "correct": 2 })
    );

    let incorrect = body_json(
        send(
            &app,
            post_json(
                "/api/learning/practice/submit",
                Some(&token),
                json!({ "word_id": 4, "is_correct": false }),
            ),
        )
        .await,
    )
    .await;
    assert_eq!(incorrect["mastery"], 50);
}

#[tokio::test]
async fn test_submit_validation() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;

    let missing_word = send(
        &app,
        post_json(
            "/api/learning/practice/submit",
            Some(&token),
            json!({ "is_correct": true }),
        ),
    )
    .await;
    assert_eq!(missing_word.status(), StatusCode::BAD_REQUEST);
    let json = body_json(missing_word).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let not_bool = send(
        &app,
        post_json(
            "/api/learning/practice/submit",
            Some(&token),
            json!({ "word_id": 4, "is_correct": "yes" }),
        ),
    )
    .await;
    assert_eq!(not_bool.status(), StatusCode::BAD_REQUEST);

    let unauthenticated = send(
        &app,
        post_json(
            "/api/learning/practice/submit",
            None,
            json!({ "word_id": 4, "is_correct": true }),
        ),
    )
    .await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_practice_drops_mastered_words() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;

    let json = body_json(send(&app, get("/api/learning/practice", Some(&token))).await).await;
    let ids: Vec<i64> = json["data"]["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 5, 6]);

    for _ in 0..3 {
        send(
            &app,
            post_json(
                "/api/learning/practice/submit",
                Some(&token),
                json!({ "word_id": 4, "is_correct": true }),
            ),
        )
        .await;
    }

    let json = body_json(send(&app, get("/api/learning/practice", Some(&token))).await).await;
    let ids: Vec<i64> = json["data"]["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 6]);
}

#[tokio::test]
async fn test_practice_session_size_override() {
    let config = bolaquent::config::Config {
        practice_session_size: Some(1),
        ..common::test_config()
    };
    let app = common::create_test_app_with(config).await;
    let token = common::login(&app, "ada", 8).await;

    let json = body_json(send(&app, get("/api/learning/practice", Some(&token))).await).await;
    assert_eq!(json["data"]["words"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_counts_learned_words() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;

    for _ in 0..2 {
        send(
            &app,
            post_json(
                "/api/learning/practice/submit",
                Some(&token),
                json!({ "word_id": 5, "is_correct": true }),
            ),
        )
        .await;
    }

    let json = body_json(send(&app, get("/api/learning/dashboard", Some(&token))).await).await;
    assert_eq!(json["data"]["total_words"], 3);
    assert_eq!(json["data"]["learned_words"], 1);
    assert_eq!(json["data"]["progress_percentage"], 33.3);
}

#[tokio::test]
async fn test_ephemeral_dashboard_and_achievements() {
    let app = common::create_test_app().await;
    let token = common::demo(&app, None).await;

    let json = body_json(send(&app, get("/api/learning/dashboard", Some(&token))).await).await;
    assert_eq!(json["data"]["learned_words"], 8);
    assert_eq!(json["data"]["progress_percentage"], 100.0);

    let json =
        body_json(send(&app, get("/api/learning/achievements", Some(&token))).await).await;
    assert_eq!(json["data"]["stats"]["words_learned"], 15);
    assert_eq!(json["data"]["stats"]["streak_days"], 3);
    assert_eq!(json["data"]["earned"][0]["name"], "First Achievement");
}

#[tokio::test]
async fn test_vocabulary_lists_tier_words() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "grace", 30).await;

    let json = body_json(send(&app, get("/api/learning/vocabulary", Some(&token))).await).await;
    let words: Vec<&str> = json["data"]["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["paradigm", "ubiquitous", "etymology"]);
}

#[tokio::test]
async fn test_admin_add_word_flow() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "admin", 40).await;

    let created = send(
        &app,
        post_json(
            "/api/admin/words",
            Some(&token),
            json!({ "word": "orbit", "definition": "A curved path around a star", "tier_id": 3 }),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let json = body_json(created).await;
    assert_eq!(json["data"]["difficulty_level"], 1);

    let json = body_json(send(&app, get("/api/admin/words?tier_id=3", Some(&token))).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);

    let missing = send(
        &app,
        post_json("/api/admin/words", Some(&token), json!({ "word": "orbit" })),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let unknown_tier = send(
        &app,
        post_json(
            "/api/admin/words",
            Some(&token),
            json!({ "word": "orbit", "definition": "path", "tier_id": 42 }),
        ),
    )
    .await;
    assert_eq!(unknown_tier.status(), StatusCode::NOT_FOUND);

    for difficulty_level in [0, -3] {
        let rejected = send(
            &app,
            post_json(
                "/api/admin/words",
                Some(&token),
                json!({
                    "word": "comet",
                    "definition": "An icy body with a tail",
                    "tier_id": 3,
                    "difficulty_level": difficulty_level
                }),
            ),
        )
        .await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(rejected).await["code"], "VALIDATION_ERROR");
    }

    let json = body_json(send(&app, get("/api/admin/words?tier_id=3", Some(&token))).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_admin_stats() {
    let app = common::create_test_app().await;
    let token = common::login(&app, "ada", 8).await;
    common::login(&app, "grace", 30).await;

    let json = body_json(send(&app, get("/api/admin/stats", Some(&token))).await).await;
    assert_eq!(json["data"]["totalUsers"], 2);
    assert_eq!(json["data"]["totalWords"], 9);
    assert_eq!(json["data"]["tierDistribution"].as_array().unwrap().len(), 6);

    let json = body_json(send(&app, get("/api/admin/tiers", Some(&token))).await).await;
    assert_eq!(json["data"][0]["name"], "Early Verbal");

    let response = send(&app, get("/api/admin/users", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
