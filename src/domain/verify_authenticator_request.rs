use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAuthenticatorRequest {
    #[serde(default)]
    pub verification_code: String,
}
