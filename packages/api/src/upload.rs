//! # Image upload proxy (server only)
//!
//! Locations require a photo. The client never talks to the image host
//! directly (that would embed the access key in WASM); instead the image
//! bytes go through a server function which forwards them as a single
//! multipart POST to an imgbb-style endpoint and returns the public URL.
//!
//! No retry: a failed upload surfaces one generic message and the user
//! tries again manually.

use thiserror::Error;

/// Default endpoint; override with `IMG_UPLOAD_URL` for a compatible host.
const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("IMGBB_API_KEY not set")]
    MissingKey,
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("image host rejected the upload")]
    Rejected,
}

#[derive(serde::Deserialize)]
struct UploadResponse {
    success: bool,
    #[serde(default)]
    data: Option<UploadData>,
}

#[derive(serde::Deserialize)]
struct UploadData {
    url: String,
}

/// Upload one image and return its public URL.
pub async fn upload_image(bytes: Vec<u8>, filename: String) -> Result<String, UploadError> {
    dotenvy::dotenv().ok();
    let key = std::env::var("IMGBB_API_KEY").map_err(|_| UploadError::MissingKey)?;
    let base = std::env::var("IMG_UPLOAD_URL").unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_string());

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = reqwest::Client::new()
        .post(format!("{base}?key={key}"))
        .multipart(form)
        .send()
        .await?;

    let body: UploadResponse = response.json().await?;
    match body {
        UploadResponse { success: true, data: Some(data) } => Ok(data.url),
        _ => Err(UploadError::Rejected),
    }
}
