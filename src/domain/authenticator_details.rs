use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorDetails {
    /// Display form of the secret: lowercased, space-separated 4-char groups.
    pub shared_key: String,
    /// otpauth:// URI rendered as a QR code by the client.
    pub authenticator_uri: String,
}
