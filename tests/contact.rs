use axum::http::{StatusCode, header};

mod helpers;

#[tokio::test]
async fn valid_submission_redirects_with_a_success_flash() {
    let response = helpers::post_form(
        helpers::test_app(),
        "/contact",
        &[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", "Please send pricing"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/contact");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("success should set a flash cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("flash="));
}

#[tokio::test]
async fn empty_message_redisplays_the_form_with_errors_at_200() {
    let response = helpers::post_form(
        helpers::test_app(),
        "/contact",
        &[("name", "Jane"), ("email", "jane@x.com"), ("message", "")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::body_text(response).await;
    assert!(body.contains("Please enter a message."));
}

#[tokio::test]
async fn invalid_email_redisplays_the_form_with_the_email_error() {
    let response = helpers::post_form(
        helpers::test_app(),
        "/contact",
        &[
            ("name", "Jane"),
            ("email", "jane-at-x"),
            ("message", "Please send pricing"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::body_text(response).await;
    assert!(body.contains("Please enter a valid email address."));
}

#[tokio::test]
async fn redisplayed_form_keeps_the_visitor_input() {
    let response = helpers::post_form(
        helpers::test_app(),
        "/contact",
        &[
            ("name", "Jane"),
            ("email", "broken"),
            ("company", "Acme Ltd"),
            ("message", "Please send pricing"),
        ],
    )
    .await;

    let body = helpers::body_text(response).await;
    assert!(body.contains("value=\"Jane\""));
    assert!(body.contains("value=\"Acme Ltd\""));
}

#[tokio::test]
async fn short_message_is_rejected() {
    let response = helpers::post_form(
        helpers::test_app(),
        "/contact",
        &[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", "short one"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::body_text(response).await;
    assert!(body.contains("at least 10 characters"));
}

#[tokio::test]
async fn contact_page_renders_the_service_dropdown() {
    let response = helpers::get(helpers::test_app(), "/contact").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = helpers::body_text(response).await;
    assert!(body.contains("Import / Export Logistics"));
    assert!(body.contains("<form method=\"post\""));
}
