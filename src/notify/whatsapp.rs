//! WhatsApp delivery through the Twilio Messages REST API.

use serde::Deserialize;

use super::Notifier;
use crate::config::{NotifyConfig, NotifyCredentials};
use crate::error::{PlanError, PlanResult};

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

pub struct WhatsAppNotifier {
    client: reqwest::Client,
    api_base: String,
    credentials: NotifyCredentials,
}

impl WhatsAppNotifier {
    /// Build the notifier. Missing credentials only produce a warning here;
    /// every later [`send`](Notifier::send) fails with a config error.
    pub fn new(config: &NotifyConfig, credentials: NotifyCredentials) -> Self {
        let missing = credentials.missing();
        if !missing.is_empty() {
            tracing::warn!(
                missing = %missing.join(", "),
                "Twilio credentials not fully set in environment variables"
            );
        }

        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn messages_url(&self, account_sid: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{account_sid}/Messages.json",
            self.api_base
        )
    }
}

impl Notifier for WhatsAppNotifier {
    async fn send(&self, body: &str) -> PlanResult<String> {
        let creds = &self.credentials;
        let (Some(sid), Some(token), Some(from), Some(to)) = (
            creds.account_sid.as_deref(),
            creds.auth_token.as_deref(),
            creds.from_number.as_deref(),
            creds.to_number.as_deref(),
        ) else {
            return Err(PlanError::Config(format!(
                "messaging client is not configured (missing {})",
                creds.missing().join(", ")
            )));
        };

        let response = self
            .client
            .post(self.messages_url(sid))
            .basic_auth(sid, Some(token))
            .form(&[("Body", body), ("From", from), ("To", to)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PlanError::Transport(format!(
                "messaging API returned HTTP {status}: {text}"
            )));
        }

        let message: MessageResource = response.json().await?;
        tracing::info!(sid = %message.sid, "message sent");
        Ok(message.sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_without_credentials_is_a_config_error() {
        let notifier = WhatsAppNotifier::new(&NotifyConfig::default(), NotifyCredentials::default());
        let err = notifier.send("hello").await.unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn messages_url_embeds_account() {
        let notifier = WhatsAppNotifier::new(
            &NotifyConfig {
                api_base: "https://api.twilio.com/".into(),
            },
            NotifyCredentials::default(),
        );
        assert_eq!(
            notifier.messages_url("AC123"),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }
}
