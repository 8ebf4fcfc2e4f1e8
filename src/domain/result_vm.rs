use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    Success,
    Error,
}

/// Uniform result envelope returned by every JSON operation. `data` carries
/// either a payload object on success or an HTML list of causes on error.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResultVM {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ResultVM {
    pub fn success(message: impl Into<String>) -> Self {
        ResultVM {
            status: Status::Success,
            message: message.into(),
            data: None,
        }
    }

    pub fn success_with(message: impl Into<String>, data: serde_json::Value) -> Self {
        ResultVM {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>, data: impl Into<String>) -> Self {
        ResultVM {
            status: Status::Error,
            message: message.into(),
            data: Some(serde_json::Value::String(data.into())),
        }
    }
}

/// Join human-readable causes into the HTML list the UI renders.
pub fn list_items<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|m| format!("<li>{}</li>", m.as_ref()))
        .collect()
}
