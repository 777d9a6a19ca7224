//! Front page route handler.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::state::AppState;

use super::helpers::{html_escape, render_page};

/// Create the front page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(front_page))
}

/// Front page handler: lists the registered content blocks.
async fn front_page(State(state): State<AppState>) -> Html<String> {
    let names = state.blocks().names();

    let content = if names.is_empty() {
        "<p>No content blocks registered.</p>".to_string()
    } else {
        let mut html = String::from("<ul class=\"block-listing\">");
        for name in names {
            html.push_str(&format!(
                "<li><a href=\"/block/{}\">{}</a></li>",
                html_escape(name),
                html_escape(name)
            ));
        }
        html.push_str("</ul>");
        html
    };

    Html(render_page("Vetrina", "Content Blocks", &content))
}
