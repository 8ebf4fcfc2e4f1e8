use crate::domain::{EmailError, EmailSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Email client that records every message instead of delivering it. Used by
/// the dev binary and the test suite.
#[derive(Default)]
pub struct MockEmailClient {
    pub sent: Vec<SentEmail>,
}

#[async_trait::async_trait]
impl EmailSender for MockEmailClient {
    async fn send_email(
        &mut self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        log::info!("sending email to {}: {}", to, subject);
        self.sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}
