use crate::helpers::{get_random_email, TestContext};
use account_service::domain::{Claim, IdentityProvider, ResultVM, Status};
use test_context::test_context;

fn new_account_body(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "associateExistingAccount": false,
        "username": username,
        "originalEmail": email,
        "loginProvider": "Google",
        "providerKey": "pk-new",
        "providerDisplayName": "Google",
    })
}

fn existing_account_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "associateExistingAccount": true,
        "associateEmail": email,
        "loginProvider": "Google",
        "providerKey": "pk-existing",
        "providerDisplayName": "Google",
    })
}

#[test_context(TestContext)]
#[tokio::test]
async fn new_account_is_created_linked_and_self_confirmed(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app.associate(&new_account_body("newuser", &email)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().contains_key("set-cookie"));

    let result = response.json::<ResultVM>().await.unwrap();
    assert_eq!(result.status, Status::Success);
    assert_eq!(result.message, "newuser has been created successfully");
    assert_eq!(result.data.unwrap()["username"], "newuser");

    let provider = app.identity_provider.read().await;
    let account = provider.find_by_email(&email).await.unwrap();
    // No confirmation email for this branch: the external provider already
    // vouched for the address.
    assert!(account.email_confirmed);
    assert_eq!(account.logins.len(), 1);
    assert_eq!(account.logins[0].provider_key, "pk-new");
    assert!(account.claims.iter().any(|claim| claim.kind == Claim::TRIAL));
    assert_eq!(provider.signed_in_account(), Some(account.id.as_str()));
    assert!(app.email_client.read().await.sent.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn new_account_with_a_taken_email_reports_provider_errors(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    app.seed_account(&email, true).await;

    let result = app
        .associate(&new_account_body("another", &email))
        .await
        .json::<ResultVM>()
        .await
        .unwrap();

    assert_eq!(result.status, Status::Error);
    assert_eq!(result.message, "Invalid data");
    let data = result.data.unwrap();
    assert!(data.as_str().unwrap().contains("already exists"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn new_account_with_missing_fields_fails_validation(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let result = app
        .associate(&serde_json::json!({
            "associateExistingAccount": false,
            "loginProvider": "Google",
            "providerKey": "pk-x",
            "providerDisplayName": "Google",
        }))
        .await
        .json::<ResultVM>()
        .await
        .unwrap();

    assert_eq!(result.status, Status::Error);
    let data = result.data.unwrap();
    let data = data.as_str().unwrap();
    assert!(data.contains("<li>A valid username is required</li>"));
    assert!(data.contains("<li>A valid email is required</li>"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn existing_account_not_found_names_the_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let result = app
        .associate(&existing_account_body(&email))
        .await
        .json::<ResultVM>()
        .await
        .unwrap();

    assert_eq!(result.status, Status::Error);
    assert_eq!(
        result.data,
        Some(serde_json::Value::String(format!(
            "<li>User with email {} not found</li>",
            email
        )))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn existing_unconfirmed_account_is_rejected_without_an_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    app.seed_account(&email, false).await;

    let result = app
        .associate(&existing_account_body(&email))
        .await
        .json::<ResultVM>()
        .await
        .unwrap();

    assert_eq!(result.status, Status::Error);
    let data = result.data.unwrap();
    assert!(data.as_str().unwrap().contains("hasn't been confirmed yet"));
    assert!(app.email_client.read().await.sent.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn existing_confirmed_account_gets_a_confirmation_email_only(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    let account_id = app.seed_account(&email, true).await;

    let result = app
        .associate(&existing_account_body(&email))
        .await
        .json::<ResultVM>()
        .await
        .unwrap();

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        result.message,
        "External account association is pending. Please check your email"
    );

    // Linking is deferred to the emailed confirmation link; nothing is
    // finalized in this call.
    let provider = app.identity_provider.read().await;
    let account = provider.find_by_id(&account_id).await.unwrap();
    assert!(account.logins.is_empty());
    assert_eq!(provider.signed_in_account(), None);
    drop(provider);

    let email_client = app.email_client.read().await;
    assert_eq!(email_client.sent.len(), 1);
    let sent = &email_client.sent[0];
    assert_eq!(sent.to, email);
    assert_eq!(sent.subject, "Confirm Google external login");
    assert!(sent
        .html_body
        .contains("/Account/ConfirmExternalProvider?userId="));
    assert!(sent.html_body.contains(&format!(
        "userId={}",
        urlencoding::encode(&account_id)
    )));
    assert!(sent.html_body.contains("providerKey=pk-existing"));
}
