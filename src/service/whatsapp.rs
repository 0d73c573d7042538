// service/whatsapp.rs
//
// Thin wrapper over the Twilio WhatsApp API. When credentials are not
// configured the client runs in disabled mode: every send is logged and
// reported as successful, so OTP codes and booking links keep flowing in
// development without a provider account.

use serde_json::Value;

use crate::config::Config;
use crate::service::error::ServiceError;

#[derive(Debug, Clone)]
struct TwilioCredentials {
    account_sid: String,
    auth_token: String,
    whatsapp_from: String,
}

#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    http: reqwest::Client,
    credentials: Option<TwilioCredentials>,
}

impl WhatsAppClient {
    pub fn from_config(config: &Config) -> Self {
        let credentials = match (
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
            config.twilio_whatsapp_from.clone(),
        ) {
            (Some(account_sid), Some(auth_token), Some(whatsapp_from)) => {
                Some(TwilioCredentials {
                    account_sid,
                    auth_token,
                    whatsapp_from,
                })
            }
            _ => {
                tracing::warn!(
                    "Twilio credentials not configured - WhatsApp delivery is disabled"
                );
                None
            }
        };

        WhatsAppClient {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    #[cfg(test)]
    pub(crate) fn disabled() -> Self {
        WhatsAppClient {
            http: reqwest::Client::new(),
            credentials: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    pub async fn send(&self, to_phone: &str, body: &str) -> Result<(), ServiceError> {
        let Some(creds) = &self.credentials else {
            tracing::info!("[whatsapp disabled] to={}: {}", to_phone, body);
            return Ok(());
        };

        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            creds.account_sid
        );

        let params = [
            ("From", format!("whatsapp:{}", creds.whatsapp_from)),
            ("To", format!("whatsapp:{}", to_phone)),
            ("Body", body.to_string()),
        ];

        let response = self
            .http
            .post(&url)
            .basic_auth(&creds.account_sid, Some(&creds.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| ServiceError::Notification(format!("Network error: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let sid = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("sid").and_then(|s| s.as_str()).map(String::from))
                .unwrap_or_else(|| "unknown".to_string());
            tracing::info!("WhatsApp message sent to {} (sid: {})", to_phone, sid);
            Ok(())
        } else {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| "No response body".to_string());
            Err(ServiceError::Notification(format!(
                "Twilio API error ({}): {}",
                status.as_u16(),
                response_text
            )))
        }
    }
}
