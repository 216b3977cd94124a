//! Multipart post form parsing.

use actix_multipart::{Field, Multipart};
use futures::StreamExt;

use sagepath_core::domain::{ImageUpload, MAX_IMAGE_BYTES, PostDraft};

use crate::middleware::error::AppError;

/// Upper bound for the text fields.
const MAX_TEXT_BYTES: usize = 1024 * 1024;

/// A submitted post form.
#[derive(Debug, Default)]
pub struct PostForm {
    pub draft: PostDraft,
    /// `None` when no file was chosen.
    pub image: Option<ImageUpload>,
    /// Submitted with the preview button instead of save.
    pub preview: bool,
}

/// Read up to `limit` bytes, then keep draining so the request completes.
/// The result is longer than `limit` exactly when the field was.
async fn read_capped(field: &mut Field, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?;
        if data.len() <= limit {
            let room = limit + 1 - data.len();
            data.extend_from_slice(&chunk[..chunk.len().min(room)]);
        }
    }
    Ok(data)
}

async fn read_text(field: &mut Field) -> Result<String, AppError> {
    let data = read_capped(field, MAX_TEXT_BYTES).await?;
    if data.len() > MAX_TEXT_BYTES {
        return Err(AppError::BadRequest("Form field too large".to_string()));
    }
    String::from_utf8(data).map_err(|_| AppError::BadRequest("Form field is not UTF-8".to_string()))
}

pub async fn read_post_form(mut payload: Multipart) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();

    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?;
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => form.draft.title = read_text(&mut field).await?,
            "content" => form.draft.content = read_text(&mut field).await?,
            "intent" => form.preview = read_text(&mut field).await? == "preview",
            "image" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                let content_type = field.content_type().map(|m| m.to_string());
                let bytes = read_capped(&mut field, MAX_IMAGE_BYTES).await?;

                // Browsers send an empty part when no file is chosen.
                if !bytes.is_empty() {
                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {
                read_capped(&mut field, 0).await?;
            }
        }
    }

    Ok(form)
}
