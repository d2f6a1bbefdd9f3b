use serde::Deserialize;

pub(crate) mod auth;
pub(crate) mod cart;
pub(crate) mod config;
pub(crate) mod menu_item;
pub(crate) mod order;
pub(crate) mod session;

/// Error body the backend attaches to some rejections.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
