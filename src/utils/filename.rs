use std::time::{SystemTime, UNIX_EPOCH};

// Hosted object names are epoch-millis based so they sort by upload time.
pub fn generate_upload_filename() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();

    format!("upload_{}", millis)
}
