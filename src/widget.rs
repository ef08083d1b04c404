//! One embeddable proposal list: display-name lookup, proposal lookup, render.

use tracing::debug;

use crate::client::{Client, Transport};
use crate::error::RequestError;
use crate::render::{RenderOptions, render_proposals};

pub const DEFAULT_COUNT: u32 = 3;

#[derive(Debug, Clone)]
pub struct Widget {
    pub parliament: String,
    pub count: u32,
    pub options: RenderOptions,
}

impl Widget {
    pub fn new(parliament: impl Into<String>) -> Self {
        Self {
            parliament: parliament.into(),
            count: DEFAULT_COUNT,
            options: RenderOptions::default(),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetches and renders the fragment.
    ///
    /// The display name degrades to the parliament key; a failed proposal
    /// request is returned as an error.
    pub fn render<T: Transport>(&self, client: &Client<T>) -> Result<String, RequestError> {
        let display_name = client.display_name(&self.parliament);
        let proposals = client.try_top_proposals(&self.parliament, self.count)?;
        debug!(
            parliament = %self.parliament,
            count = proposals.len(),
            "rendering proposals"
        );
        Ok(render_proposals(&display_name, &proposals, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RawResponse;
    use reqwest::Url;

    /// Answers by path suffix; anything unmatched is a 404.
    struct RoutedTransport(Vec<(&'static str, u16, &'static str)>);

    impl Transport for RoutedTransport {
        fn get(&self, url: &Url) -> Result<RawResponse, RequestError> {
            let hit = self.0.iter().find(|(suffix, _, _)| url.path().ends_with(suffix));
            Ok(match hit {
                Some((_, status, body)) => RawResponse {
                    status: *status,
                    reason: String::new(),
                    body: body.to_string(),
                },
                None => RawResponse {
                    status: 404,
                    reason: "Not Found".to_string(),
                    body: String::new(),
                },
            })
        }
    }

    fn client(routes: Vec<(&'static str, u16, &'static str)>) -> Client<RoutedTransport> {
        Client::new(
            Url::parse("http://openantrag.test/api").unwrap(),
            RoutedTransport(routes),
        )
    }

    #[test]
    fn test_widget_renders_name_and_proposals() {
        let c = client(vec![
            ("/GetByKey/XX", 200, r#"{"Name2":"Landtag XX"}"#),
            (
                "/proposal/XX/GetTop/2",
                200,
                r#"[{"Title":"A","FullUrl":"https://x/a","status":"neu"},{"Title":"B","FullUrl":"https://x/b","status":"alt"}]"#,
            ),
        ]);
        let html = Widget::new("XX").with_count(2).render(&c).unwrap();
        assert!(html.starts_with("<h2>Anträge Landtag XX</h2>"));
        let a = html.find(">A</a>").unwrap();
        let b = html.find(">B</a>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_widget_falls_back_to_key_for_heading() {
        let c = client(vec![("/proposal/XX/GetTop/3", 200, "[]")]);
        let html = Widget::new("XX").render(&c).unwrap();
        assert_eq!(html, "<h2>Anträge XX</h2>\n");
    }

    #[test]
    fn test_widget_renders_proposal_with_null_link() {
        let c = client(vec![(
            "/proposal/XX/GetTop/3",
            200,
            r#"[{"Title":"A","FullUrl":null,"status":"neu"}]"#,
        )]);
        let html = Widget::new("XX").render(&c).unwrap();
        assert!(html.contains("<a href=\"#\" target=\"_blank\">A</a>"));
        assert!(html.contains("<span>neu</span>"));
    }

    #[test]
    fn test_widget_propagates_proposal_failure() {
        let c = client(vec![("/GetByKey/XX", 200, r#"{"Name2":"Landtag XX"}"#)]);
        assert!(matches!(
            Widget::new("XX").render(&c),
            Err(RequestError::Status { code: 404, .. })
        ));
    }
}
