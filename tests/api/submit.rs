use anyhow::Result;
use serde_json::json;
use subwire::form::structs::UiState;
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{spawn_test_form, ACTION_PATH};

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": "accepted" }))
}

fn rejected() -> ResponseTemplate {
    ResponseTemplate::new(500)
}

#[tokio::test]
async fn submit_posts_the_address_and_reveals_the_success_message() -> Result<()> {
    let mut app = spawn_test_form().await?;

    Mock::given(path(ACTION_PATH))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "email": "le_guin@example.com" })))
        .respond_with(accepted())
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("le_guin@example.com").await;

    assert_eq!(state, UiState::Succeeded);
    app.assert_single_indicator();

    let form = app.controller.form();
    assert!(form.loading_indicator().is_hidden());
    assert!(!form.success_message().is_hidden());
    assert!(form.failure_message().is_hidden());
    // The form is consumed: inputs and submit control are gone.
    assert!(form.field_group().is_hidden());
    assert!(form.submit_control().is_hidden());

    Ok(())
}

#[tokio::test]
async fn failed_submission_reveals_the_failure_message_and_reenables_submit() -> Result<()> {
    let mut app = spawn_test_form().await?;

    Mock::given(any())
        .respond_with(rejected())
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("le_guin@example.com").await;

    assert_eq!(state, UiState::Failed);
    app.assert_single_indicator();

    let form = app.controller.form();
    assert!(form.loading_indicator().is_hidden());
    assert!(!form.failure_message().is_hidden());
    assert!(!form.submit_control().is_hidden());
    assert!(!form.submit_control().is_disabled());
    assert!(form.accepts_submission(), "A manual retry must be possible");

    Ok(())
}

#[tokio::test]
async fn retry_after_failure_succeeds() -> Result<()> {
    let mut app = spawn_test_form().await?;

    // First attempt fails, second one goes through.
    Mock::given(path(ACTION_PATH))
        .and(method("POST"))
        .respond_with(rejected())
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.backend)
        .await;
    Mock::given(path(ACTION_PATH))
        .and(method("POST"))
        .respond_with(accepted())
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("le_guin@example.com").await;
    assert_eq!(state, UiState::Failed);

    let state = app.type_and_submit("le_guin@example.com").await;
    assert_eq!(state, UiState::Succeeded);
    app.assert_single_indicator();

    let form = app.controller.form();
    assert!(
        form.failure_message().is_hidden(),
        "The old failure message must be cleared by the retry"
    );
    assert!(!form.success_message().is_hidden());

    Ok(())
}

#[tokio::test]
async fn empty_input_is_submitted_as_is() -> Result<()> {
    let mut app = spawn_test_form().await?;

    // No client-side rejection: the empty value goes out verbatim.
    Mock::given(path(ACTION_PATH))
        .and(method("POST"))
        .and(body_json(json!({ "email": "" })))
        .respond_with(accepted())
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("").await;
    assert_eq!(state, UiState::Succeeded);

    Ok(())
}

#[tokio::test]
async fn consumed_form_issues_no_further_requests() -> Result<()> {
    let mut app = spawn_test_form().await?;

    // expect(1) verifies on drop that the second submit never hit the wire.
    Mock::given(path(ACTION_PATH))
        .and(method("POST"))
        .respond_with(accepted())
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("le_guin@example.com").await;
    assert_eq!(state, UiState::Succeeded);

    let state = app.type_and_submit("le_guin@example.com").await;
    assert_eq!(state, UiState::Succeeded, "Succeeded is terminal");

    Ok(())
}

#[tokio::test]
async fn repeated_failures_leave_the_same_failed_state() -> Result<()> {
    let mut app = spawn_test_form().await?;

    Mock::given(any())
        .respond_with(rejected())
        .expect(2)
        .mount(&app.backend)
        .await;

    for _ in 0..2 {
        let state = app.type_and_submit("le_guin@example.com").await;
        assert_eq!(state, UiState::Failed);
        app.assert_single_indicator();

        let form = app.controller.form();
        assert!(!form.failure_message().is_hidden());
        assert!(form.accepts_submission());
    }

    Ok(())
}

#[tokio::test]
async fn a_2xx_without_a_json_body_counts_as_failure() -> Result<()> {
    let mut app = spawn_test_form().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>thanks</html>"))
        .expect(1)
        .mount(&app.backend)
        .await;

    let state = app.type_and_submit("le_guin@example.com").await;

    assert_eq!(state, UiState::Failed);
    assert!(app.controller.form().accepts_submission());

    Ok(())
}
