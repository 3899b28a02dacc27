use axum::{
    extract::Extension,
    http::header,
    response::{Html, IntoResponse, Response},
};

use crate::domains::content::PageContext;
use crate::server::app::AppState;
use crate::server::static_files::render_page;

/// `GET /` — the public page.
///
/// Content is admin-editable, so every response carries aggressive no-cache
/// headers: the browser must see the latest state on each load. A content
/// load failure degrades to rendering the shell with an empty context; the
/// request itself never fails.
pub async fn home_handler(Extension(state): Extension<AppState>) -> Response {
    let context = match PageContext::load(&state.db_pool, &state.config).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load page content, rendering empty context");
            PageContext::default()
        }
    };

    (
        [
            (
                header::CACHE_CONTROL,
                "no-cache, no-store, must-revalidate, max-age=0",
            ),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Html(render_page(&context)),
    )
        .into_response()
}
