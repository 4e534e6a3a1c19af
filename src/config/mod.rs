use crate::error::{UiError, UiResult};
use crate::models::PageData;
use std::sync::atomic::{AtomicBool, Ordering};

const DEFAULT_BASE_PATH: &str = "/blog";

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub base_path: String,
    pub debug: bool,
}

impl EnvConfig {
    pub fn new() -> Self {
        let mut cfg = Self::with_base_path(DEFAULT_BASE_PATH);

        // Both `window.ENV.BLOG_BASE_PATH` and `window.ENV.blog_base_path` are
        // accepted; the upper-case key wins.
        if let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) {
            if !env.is_undefined() && env.is_object() {
                if let Some(base) = read_env_key(&env, "BLOG_BASE_PATH", |v| v.as_string()) {
                    cfg = Self::with_base_path(&base);
                }
                if let Some(debug) = read_env_key(&env, "DEBUG", |v| v.as_bool()) {
                    cfg.debug = debug;
                }
            }
        }

        DEBUG.store(cfg.debug, Ordering::Relaxed);
        cfg
    }

    pub fn with_base_path(base: &str) -> Self {
        Self {
            base_path: base.trim().trim_end_matches('/').to_string(),
            debug: false,
        }
    }

    pub fn new_post_url(&self) -> String {
        format!("{}/newpost", self.base_path)
    }

    pub fn post_url(&self, post_id: &str) -> String {
        format!("{}/{}", self.base_path, urlencoding::encode(post_id))
    }

    pub fn front_url(&self) -> String {
        if self.base_path.is_empty() {
            "/".to_string()
        } else {
            self.base_path.clone()
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env_key<T>(
    env: &wasm_bindgen::JsValue,
    upper: &str,
    read: impl Fn(&wasm_bindgen::JsValue) -> Option<T>,
) -> Option<T> {
    let lower = upper.to_lowercase();
    let found = [upper, lower.as_str()].into_iter().find_map(|k| {
        js_sys::Reflect::get(env, &k.into())
            .ok()
            .and_then(|v| read(&v))
    });
    found
}

pub(crate) fn parse_page_data(json: &str) -> UiResult<PageData> {
    serde_json::from_str(json).map_err(UiError::parse)
}

/// Decode `window.PAGE`. A missing object is an empty page; a malformed one
/// is reported so the caller can log it and fall back to an empty page.
pub(crate) fn load_page_data() -> UiResult<PageData> {
    let Some(page) = web_sys::window().and_then(|w| w.get("PAGE")) else {
        return Ok(PageData::default());
    };
    if page.is_undefined() || page.is_null() {
        return Ok(PageData::default());
    }

    let json = js_sys::JSON::stringify(&page)
        .map_err(|e| UiError::dom(e, "window.PAGE"))?
        .as_string()
        .unwrap_or_default();
    parse_page_data(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_trailing_slash_trimmed() {
        let cfg = EnvConfig::with_base_path("/blog/");
        assert_eq!(cfg.base_path, "/blog");
        assert_eq!(cfg.new_post_url(), "/blog/newpost");
        assert_eq!(cfg.post_url("42"), "/blog/42");
        // The front page route is the empty path under the router base.
        assert_eq!(cfg.front_url(), cfg.base_path);
    }

    #[test]
    fn test_post_url_encodes_id() {
        let cfg = EnvConfig::with_base_path("/blog");
        assert_eq!(cfg.post_url("a b"), "/blog/a%20b");
    }

    #[test]
    fn test_root_base_path_front_url() {
        let cfg = EnvConfig::with_base_path("/");
        assert_eq!(cfg.base_path, "");
        assert_eq!(cfg.front_url(), "/");
        assert_eq!(cfg.new_post_url(), "/newpost");
    }

    #[test]
    fn test_parse_page_data_reports_malformed_json() {
        let err = parse_page_data("{not json").unwrap_err();
        assert_eq!(err.kind, crate::error::UiErrorKind::Parse);
    }
}
