//! Document shell around the page sections.

use crate::escape::escape_html;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document skeleton: doctype, head, and the body wrapper the sections go in.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections.
    pub body_start: String,
    /// HTML after sections.
    pub body_end: String,
}

impl Shell {
    /// Create a shell with a bare `<body><main>` wrapper.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Wrap rendered sections in the full document.
    pub fn wrap(&self, sections: &[String]) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        for section in sections {
            html.push_str(section);
            html.push('\n');
        }
        html.push_str(&self.body_end);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render() {
        let head = HeadContent::new("A & B")
            .with_meta("viewport", "width=device-width")
            .with_style("body{}");
        let html = head.render();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width">"#));
        assert!(html.contains("<style>body{}</style>"));
    }

    #[test]
    fn test_wrap_orders_sections() {
        let shell = Shell::new(HeadContent::new("T"));
        let html = shell.wrap(&["<p>one</p>".to_string(), "<p>two</p>".to_string()]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        let one = html.find("<p>one</p>").unwrap();
        let two = html.find("<p>two</p>").unwrap();
        assert!(one < two);
        assert!(html.ends_with("</html>"));
    }
}
