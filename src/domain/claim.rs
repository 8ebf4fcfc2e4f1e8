/// An opaque (kind, value) tag attached to an account. The only claim these
/// flows issue is the "Trial" marker stamped at external-account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub kind: String,
    pub value: String,
}

impl Claim {
    pub const TRIAL: &'static str = "Trial";

    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn trial_started_now() -> Self {
        Self::new(Self::TRIAL, chrono::Local::now().to_rfc3339())
    }
}
