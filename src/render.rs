//! HTML fragment for a parliament's proposal list.

use crate::model::Proposal;
use crate::theme::Background;

pub const DEFAULT_HEADING: &str = "Anträge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text placed before the display name in the `<h2>`.
    pub heading: String,
    /// Background of each proposal paragraph; unset emits no `style`.
    pub background: Option<Background>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            background: None,
        }
    }
}

/// Renders `proposals` in order under a heading naming the parliament.
///
/// Every interpolated value is escaped. Links that are not http(s) are
/// replaced by `#`.
pub fn render_proposals(
    display_name: &str,
    proposals: &[Proposal],
    options: &RenderOptions,
) -> String {
    let mut html = format!(
        "<h2>{} {}</h2>\n",
        escape_html(&options.heading),
        escape_html(display_name)
    );

    let open = match &options.background {
        Some(bg) => format!("<p style=\"background-color:{}\">\n", escape_html(bg.as_css())),
        None => "<p>\n".to_string(),
    };

    for proposal in proposals {
        html.push_str(&open);
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>\n",
            escape_html(safe_href(proposal.full_url())),
            escape_html(proposal.title())
        ));
        html.push_str("<br/>\n");
        html.push_str(&format!("<span>{}</span>\n", escape_html(proposal.status())));
        html.push_str("</p>\n");
    }
    html
}

fn safe_href(url: &str) -> &str {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed
    } else {
        "#"
    }
}

/// Escapes text for use in HTML content and double- or single-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
