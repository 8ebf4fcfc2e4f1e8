use std::env;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    issuer: String,
    base_url: String,
    session_cookie_name: String,
    external_providers: Vec<String>,
}

impl Config {
    /// Issuer label embedded in otpauth:// URIs, shown by authenticator apps.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Public base URL used when building emailed confirmation links.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    pub fn external_providers(&self) -> &[String] {
        &self.external_providers
    }

    pub fn from_env() -> Self {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let issuer = opt_var("APP_ISSUER").unwrap_or_else(|| "AccountFlows".into());
        let base_url = opt_var("BASE_URL").unwrap_or_else(|| "http://localhost:3000".into());
        let session_cookie_name = opt_var("SESSION_COOKIE_NAME").unwrap_or_else(|| "session".into());
        let external_providers = opt_var("EXTERNAL_PROVIDERS")
            .unwrap_or_else(|| "Google,GitHub".into())
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            issuer,
            base_url,
            session_cookie_name,
            external_providers,
        }
    }
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
