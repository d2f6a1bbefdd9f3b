use std::path::PathBuf;

/// Client configs
#[derive(Debug)]
pub(crate) struct ClientConfig {
    /// base url of the REST backend, without trailing path
    pub api_base: String,
    /// file holding the persisted session and cart
    pub state_path: PathBuf,
}

impl ClientConfig {
    pub fn new(api_base: String, state_path: PathBuf) -> Self {
        Self {
            api_base,
            state_path,
        }
    }
}
