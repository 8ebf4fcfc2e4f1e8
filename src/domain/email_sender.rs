use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EmailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

// Outbound email transport. Fire-and-forget from the flows' perspective;
// a delivery failure surfaces as an operation failure to the caller.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &mut self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailError>;
}
