//! openantrag: client and HTML renderer for the OpenAntrag proposal API.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod render;
pub mod theme;
pub mod widget;

pub use client::{Client, FailurePolicy, HttpTransport, Lookup};
pub use config::Config;
pub use error::RequestError;
pub use model::{Parliament, ProcessStep, Proposal};
pub use widget::Widget;
