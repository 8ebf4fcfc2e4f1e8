use reqwest::{Client, Response};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use account_service::app_router;
use account_service::app_state::AppState;
use account_service::domain::{Email, ExternalAssertion, UserAccount};
use account_service::services::{HashmapIdentityProvider, MockEmailClient};
use account_service::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub identity_provider: Arc<RwLock<HashmapIdentityProvider>>,
    pub email_client: Arc<RwLock<MockEmailClient>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::from_env();
        let identity_provider = Arc::new(RwLock::new(HashmapIdentityProvider::new(
            config.issuer().to_owned(),
            vec!["Google".to_string(), "GitHub".to_string()],
        )));
        let email_client = Arc::new(RwLock::new(MockEmailClient::default()));

        let app_state = AppState::new(
            identity_provider.clone(),
            email_client.clone(),
            Arc::new(RwLock::new(config)),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        // Redirects are asserted on directly, never followed.
        let http_client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build http client");

        TestApp {
            address,
            http_client,
            identity_provider,
            email_client,
        }
    }

    pub async fn seed_account(&self, email: &str, confirmed: bool) -> String {
        let mut account =
            UserAccount::new(email, Email::parse(email.to_string()).expect("invalid test email"));
        account.email_confirmed = confirmed;
        let account_id = account.id.clone();
        self.identity_provider.write().await.add_account(account);
        account_id
    }

    pub async fn stage_assertion(
        &self,
        provider: &str,
        provider_key: &str,
        display_name: &str,
        email: &str,
    ) {
        self.identity_provider
            .write()
            .await
            .stage_assertion(ExternalAssertion {
                login_provider: provider.to_string(),
                provider_key: provider_key.to_string(),
                provider_display_name: display_name.to_string(),
                email: email.to_string(),
            });
    }

    pub async fn get_details(&self, account_id: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/ManageAccount/Details", &self.address));
        if let Some(id) = account_id {
            request = request.header("Cookie", format!("session={}", id));
        }
        request
            .send()
            .await
            .expect("Failed to execute details request.")
    }

    pub async fn setup_authenticator(&self, account_id: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/ManageAccount/SetupAuthenticator", &self.address));
        if let Some(id) = account_id {
            request = request.header("Cookie", format!("session={}", id));
        }
        request
            .send()
            .await
            .expect("Failed to execute setup authenticator request.")
    }

    pub async fn verify_authenticator(&self, account_id: &str, code: &str) -> Response {
        self.http_client
            .post(format!("{}/ManageAccount/VerifyAuthenticator", &self.address))
            .json(&serde_json::json!({ "verificationCode": code }))
            .header("Cookie", format!("session={}", account_id))
            .send()
            .await
            .expect("Failed to execute verify authenticator request.")
    }

    pub async fn external_login(&self, provider: &str, return_url: Option<&str>) -> Response {
        let mut url = format!("{}/ExternalAccount/Login?provider={}", &self.address, provider);
        if let Some(return_url) = return_url {
            url.push_str(&format!("&returnUrl={}", return_url));
        }
        self.http_client
            .get(url)
            .send()
            .await
            .expect("Failed to execute external login request.")
    }

    pub async fn external_callback(
        &self,
        return_url: Option<&str>,
        remote_error: Option<&str>,
    ) -> Response {
        let mut url = format!("{}/ExternalAccount/Callback", &self.address);
        let mut query = Vec::new();
        if let Some(return_url) = return_url {
            query.push(format!("returnUrl={}", return_url));
        }
        if let Some(remote_error) = remote_error {
            query.push(format!("remoteError={}", remote_error));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        self.http_client
            .get(url)
            .send()
            .await
            .expect("Failed to execute external callback request.")
    }

    pub async fn external_providers(&self) -> Response {
        self.http_client
            .get(format!("{}/ExternalAccount/Providers", &self.address))
            .send()
            .await
            .expect("Failed to execute providers request.")
    }

    pub async fn associate(&self, body: &serde_json::Value) -> Response {
        self.http_client
            .post(format!("{}/api/externalaccount/associate", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute associate request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub fn location_of(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("response carries no location header")
        .to_str()
        .expect("location header is not valid UTF-8")
        .to_string()
}
