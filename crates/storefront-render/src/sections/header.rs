//! Page header section.

use crate::escape::escape_html;

/// Render the site header with title and tagline.
pub fn render_header(title: &str, tagline: &str) -> String {
    format!(
        r#"<header class="site-header" data-section="header">
    <div class="container">
        <h1 class="site-title">{}</h1>
        <p class="site-tagline">{}</p>
    </div>
</header>"#,
        escape_html(title),
        escape_html(tagline)
    )
}
