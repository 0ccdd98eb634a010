use std::env;

/// Deployment configuration for the SQS adapter.
///
/// Everything that varies by deployment is an explicit field here — the
/// adapter itself never reads the process environment. `disabled` suppresses
/// all network calls, which is how test environments run the full code path
/// without touching AWS.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stage: String,
    pub region: String,
    pub account_id: String,
    pub disabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let stage = env::var("STAGE").map_err(|e| format!("STAGE: {e}"))?;
        let disabled = stage == "TEST";
        Ok(Self {
            region: env::var("AWS_REGION").map_err(|e| format!("AWS_REGION: {e}"))?,
            account_id: env::var("SQS_ACCOUNT_ID").map_err(|e| format!("SQS_ACCOUNT_ID: {e}"))?,
            stage,
            disabled,
        })
    }
}
