use actix_multipart::{Multipart, MultipartError};
use actix_web::error::PayloadError;
use actix_web::{web, HttpMessage, HttpRequest};
use futures_util::{stream, TryStreamExt};

use crate::models::todo::TodoForm;

pub const MAX_FORM_BYTES: usize = 10 * 1024 * 1024;

/// Reads `title` and `completed` from a urlencoded or multipart body.
/// Other content types, and bodies that fail to parse, yield empty fields.
pub async fn read_todo_form(req: &HttpRequest, body: web::Bytes) -> TodoForm {
    let pairs = match req.content_type() {
        "application/x-www-form-urlencoded" => {
            serde_urlencoded::from_bytes(&body).unwrap_or_else(|err| {
                log::debug!("ignoring malformed form body: {}", err);
                Vec::new()
            })
        }
        "multipart/form-data" => multipart_pairs(req, body).await.unwrap_or_else(|err| {
            log::debug!("ignoring malformed multipart body: {}", err);
            Vec::new()
        }),
        _ => Vec::new(),
    };
    TodoForm::from_pairs(pairs)
}

async fn multipart_pairs(
    req: &HttpRequest,
    body: web::Bytes,
) -> Result<Vec<(String, String)>, MultipartError> {
    let payload = stream::once(async move { Ok::<_, PayloadError>(body) });
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut pairs = Vec::new();
    while let Some(mut field) = multipart.try_next().await? {
        let disposition = field.content_disposition();
        // file parts are not form values
        let name = match (disposition.get_name(), disposition.get_filename()) {
            (Some(name), None) => name.to_string(),
            _ => continue,
        };
        let mut value = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            value.extend_from_slice(&chunk);
        }
        pairs.push((name, String::from_utf8_lossy(&value).into_owned()));
    }
    Ok(pairs)
}
