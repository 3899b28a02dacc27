use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::domains::content::PageContext;

/// Page shell and its static assets, embedded at compile time.
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct PageAssets;

/// Marker in the shell replaced with the serialized content context.
const CONTEXT_PLACEHOLDER: &str = "__PAGE_CONTEXT__";

/// Produce the rendered page document: the embedded shell with the content
/// context spliced in as JSON.
pub fn render_page(context: &PageContext) -> String {
    let shell = PageAssets::get("index.html")
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
        .unwrap_or_default();

    let json = match serde_json::to_string(context) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize page context");
            "{}".to_string()
        }
    };
    // Keep '<' out of the inline <script> block
    let json = json.replace('<', "\\u003c");

    shell.replace(CONTEXT_PLACEHOLDER, &json)
}

/// Serve embedded shell assets (stylesheets etc.) under /assets/.
pub async fn asset_handler(uri: Uri) -> Response {
    let path = uri
        .path()
        .trim_start_matches("/assets")
        .trim_start_matches('/');

    match PageAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
