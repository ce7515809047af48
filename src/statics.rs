use std::path::Path;

use axum::{
    extract,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
    Router,
};
use include_dir::{include_dir, Dir};

use crate::{rejections::AppError, AppState};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

async fn send_file(extract::Path(path): extract::Path<String>) -> Result<impl IntoResponse, AppError> {
    let file = STATIC_DIR
        .get_file(Path::new(&path))
        .ok_or(AppError::NotFound)?;

    let content_type = match file.path().extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "js" => "text/javascript",
        _ => "application/octet-stream",
    };

    Ok((
        [
            (CONTENT_TYPE, content_type),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        file.contents(),
    ))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(send_file))
}
