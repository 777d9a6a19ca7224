//! Content block page routes.
//!
//! `/image-slider` is the demo page; `/block/{name}` renders any
//! registered block. A name with no registered block yields a page with a
//! blank content section rather than a 404.

use axum::Router;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;

use crate::error::AppResult;
use crate::state::AppState;

use super::helpers::render_page;

/// Create the block page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image-slider", get(image_slider_page))
        .route("/block/{name}", get(block_page))
}

/// Demo page embedding the image slider block.
async fn image_slider_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let fragment = state.blocks().render(image_slider::BLOCK_NAME)?;

    Ok(Html(render_page(
        "Image Slider Plugin",
        "Image Slider",
        &fragment,
    )))
}

/// Render an arbitrary registered block into the page chrome.
async fn block_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Html<String>> {
    let fragment = state.blocks().render(&name)?;

    Ok(Html(render_page(&name, &name, &fragment)))
}
