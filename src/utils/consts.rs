// Recovery codes are only issued in a single batch of this size, and only
// when the account holds zero codes at verification time.
pub const RECOVERY_CODE_COUNT: usize = 10;
pub const RECOVERY_CODE_LENGTH: usize = 8;

pub const TOTP_DIGITS: usize = 6;
pub const TOTP_STEP_SECONDS: u64 = 30;
pub const TOTP_SKEW_STEPS: u8 = 1;

pub const EXTERNAL_CALLBACK_PATH: &str = "/ExternalAccount/Callback";
