use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;

/// Hosted-file record returned by the backing CDN.
#[derive(Deserialize, Debug, Clone)]
pub struct Attachment {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Error)]
pub enum HostError {
    /// The backend answered and refused the upload.
    #[error("{0}")]
    Rejected(String),

    /// The outbound call itself failed.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The backend accepted the upload but returned no attachment record.
    #[error("upload accepted but no attachment was returned")]
    MissingAttachment,
}

/// External collaborator that turns raw bytes into a publicly hosted file.
#[async_trait]
pub trait AttachmentHost: Send + Sync {
    async fn upload(&self, data: Bytes, filename: &str) -> Result<Attachment, HostError>;
}
