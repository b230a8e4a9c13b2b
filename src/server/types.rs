use crate::core::attachment_host::AttachmentHost;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub host: Arc<dyn AttachmentHost>,
}

// Response structures
#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub filename: String,
}

#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
