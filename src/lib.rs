pub use client::AdminClient;
pub use config::{AdminConfig, StoreConfig};
pub use error::{AdminError, Result};
pub use form::{EditPage, FormError, LinkForm, LinkFormView, ProfileEditor, ScoreEditor};
pub use model::*;
pub use notice::{Navigation, Notice, NoticeLevel, Route};
pub use store::StoreClient;

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod month;
pub mod notice;
pub mod score;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
