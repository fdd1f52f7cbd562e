//! Client for the external presence service.
//!
//! Presence tracks which actors are currently viewing a document. It is a
//! consumed collaborator: Quill hands it a document id and gets back a set
//! of present actor ids. The result is purely informational and never
//! gates access, so every failure path degrades to an empty set.

use quill_core::{DocumentId, UserId};
use serde::Deserialize;

use crate::config::ServerConfig;

/// Response shape of the presence service.
#[derive(Debug, Deserialize)]
struct ViewersResponse {
    viewers: Vec<UserId>,
}

/// Presence lookups against the configured external service.
///
/// Disabled (always-empty) when `PRESENCE_URL` is unset.
#[derive(Debug)]
pub enum PresenceClient {
    Http {
        base_url: String,
        client: reqwest::Client,
    },
    Disabled,
}

impl PresenceClient {
    /// Build a client from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        match &config.presence_url {
            Some(url) => Self::Http {
                base_url: url.trim_end_matches('/').to_string(),
                client: reqwest::Client::new(),
            },
            None => Self::Disabled,
        }
    }

    /// Actors currently viewing the document.
    ///
    /// Best effort: service errors are logged at warn and reported as
    /// nobody present.
    pub async fn viewers(&self, document: DocumentId) -> Vec<UserId> {
        let Self::Http { base_url, client } = self else {
            return Vec::new();
        };

        let url = format!("{}/presence/{}", base_url, document);
        let result = async {
            let response = client.get(&url).send().await?.error_for_status()?;
            response.json::<ViewersResponse>().await
        }
        .await;

        match result {
            Ok(body) => body.viewers,
            Err(e) => {
                tracing::warn!(document = %document, error = %e, "Presence lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_client_reports_nobody() {
        let client = PresenceClient::Disabled;
        let viewers = client.viewers(DocumentId::new()).await;
        assert!(viewers.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_degrades_to_empty() {
        let client = PresenceClient::Http {
            base_url: "http://127.0.0.1:1".to_string(),
            client: reqwest::Client::new(),
        };
        let viewers = client.viewers(DocumentId::new()).await;
        assert!(viewers.is_empty());
    }

    #[test]
    fn test_from_config_disabled_without_url() {
        let config = ServerConfig {
            database_url: String::new(),
            port: 3000,
            log_level: "info".into(),
            cors_allowed_origins: "*".into(),
            jwt_public_key: String::new(),
            allow_dev_identity: false,
            presence_url: None,
        };
        assert!(matches!(
            PresenceClient::from_config(&config),
            PresenceClient::Disabled
        ));
    }
}
