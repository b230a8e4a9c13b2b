use crate::core::attachment_host::{Attachment, AttachmentHost, HostError};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Webhook message envelope; only the attachments array matters here.
#[derive(Deserialize, Debug)]
struct WebhookMessage {
    attachments: Vec<Attachment>,
}

/// Attachment host backed by a Discord-style webhook. Uploading a multipart
/// `files[0]` part creates a message whose attachment carries a public CDN
/// url.
pub struct DiscordCdn {
    http_client: Client,
    webhook_url: String,
}

impl DiscordCdn {
    pub fn new(http_client: Client, webhook_url: String) -> Self {
        Self {
            http_client,
            webhook_url,
        }
    }
}

#[async_trait]
impl AttachmentHost for DiscordCdn {
    async fn upload(&self, data: Bytes, filename: &str) -> Result<Attachment, HostError> {
        let part = Part::stream(data).file_name(filename.to_string());
        let form = Form::new().part("files[0]", part);

        // wait=true makes the webhook return the created message instead of 204
        let response = self
            .http_client
            .post(&self.webhook_url)
            .query(&[("wait", "true")])
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(HostError::Rejected(format!(
                "webhook upload failed: {} - {}",
                status, error_text
            )));
        }

        let message: WebhookMessage = response.json().await?;

        message
            .attachments
            .into_iter()
            .next()
            .ok_or(HostError::MissingAttachment)
    }
}

#[cfg(test)]
mod cfg_tests {
    use super::WebhookMessage;

    #[test]
    pub fn test_webhook_message_parsing() {
        let raw = r#"{
            "id": "1134207985",
            "type": 0,
            "content": "",
            "attachments": [{
                "id": "1134207986",
                "filename": "upload_1754550000000",
                "size": 4096,
                "url": "https://cdn.example.com/attachments/1/2/upload_1754550000000",
                "proxy_url": "https://media.example.com/attachments/1/2/upload_1754550000000"
            }]
        }"#;

        let message: WebhookMessage = serde_json::from_str(raw).unwrap();
        let attachment = &message.attachments[0];

        assert_eq!(attachment.filename, "upload_1754550000000");
        assert_eq!(
            attachment.url,
            "https://cdn.example.com/attachments/1/2/upload_1754550000000"
        );
    }

    #[test]
    pub fn test_webhook_message_without_attachments() {
        let message: WebhookMessage =
            serde_json::from_str(r#"{"id": "1", "attachments": []}"#).unwrap();
        assert!(message.attachments.is_empty());
    }
}
