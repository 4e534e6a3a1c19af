use crate::config::{load_page_data, EnvConfig};
use crate::models::PageData;
use leptos::logging::warn;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub config: EnvConfig,

    /// Server-rendered page data; read once at mount.
    pub page: PageData,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        let page = load_page_data().unwrap_or_else(|e| {
            warn!("ignoring window.PAGE: {e}");
            PageData::default()
        });
        debug_log!(
            "page data: post={} comments={}",
            page.post.is_some(),
            page.comments.len()
        );

        Self { config, page }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
