//! The fixed endpoint templates of the OpenAntrag API.

use reqwest::Url;

use crate::error::RequestError;

/// One of the three resources the client knows how to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `representation/GetByKey/{parliament}`
    ParliamentByKey { parliament: &'a str },
    /// `representation/GetProcessSteps/{parliament}`
    ProcessSteps { parliament: &'a str },
    /// `proposal/{parliament}/GetTop/{count}`
    TopProposals { parliament: &'a str, count: u32 },
}

impl Endpoint<'_> {
    /// Path segments below the API host, parameters unescaped.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Endpoint::ParliamentByKey { parliament } => vec![
                "representation".to_string(),
                "GetByKey".to_string(),
                parliament.to_string(),
            ],
            Endpoint::ProcessSteps { parliament } => vec![
                "representation".to_string(),
                "GetProcessSteps".to_string(),
                parliament.to_string(),
            ],
            Endpoint::TopProposals { parliament, count } => vec![
                "proposal".to_string(),
                parliament.to_string(),
                "GetTop".to_string(),
                count.to_string(),
            ],
        }
    }

    fn parliament(&self) -> &str {
        match self {
            Endpoint::ParliamentByKey { parliament }
            | Endpoint::ProcessSteps { parliament }
            | Endpoint::TopProposals { parliament, .. } => parliament,
        }
    }

    /// Full request URL under `base`.
    ///
    /// The base keeps its own path (e.g. `/api`); each segment is
    /// percent-encoded so a parliament key cannot add path components.
    /// Empty, `.` and `..` keys are rejected: URL path normalization would
    /// drop or resolve them.
    pub fn url(&self, base: &Url) -> Result<Url, RequestError> {
        let parliament = self.parliament();
        let reason = match parliament {
            "" => Some("parliament key is empty"),
            "." | ".." => Some("parliament key is a dot segment"),
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(RequestError::InvalidParameter {
                value: parliament.to_string(),
                reason,
            });
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(self.segments());
        }
        Ok(url)
    }
}
