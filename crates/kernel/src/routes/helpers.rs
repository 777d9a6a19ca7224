//! Shared route helpers for page rendering.

pub use vetrina_sdk::render::html_escape;

/// Wrap a rendered fragment in the demo page chrome.
///
/// The fragment is embedded as-is; escaping markup is the producer's
/// responsibility.
pub fn render_page(title: &str, heading: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{}</title>
  </head>
  <body>
    <h1>{}</h1>
    {}
  </body>
</html>"#,
        html_escape(title),
        html_escape(heading),
        content
    )
}
