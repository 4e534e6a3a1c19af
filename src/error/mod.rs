#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum UiErrorKind {
    /// An element the page is expected to render is not mounted.
    MissingElement,
    /// A DOM call threw.
    Dom,
    /// Bootstrapped page data could not be decoded.
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

impl UiError {
    pub fn missing(what: &str) -> Self {
        Self {
            kind: UiErrorKind::MissingElement,
            message: format!("{what} is not mounted"),
        }
    }

    pub fn dom(e: wasm_bindgen::JsValue, ctx: &str) -> Self {
        let detail = e
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&e, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| "unknown DOM error".to_string());
        Self {
            kind: UiErrorKind::Dom,
            message: format!("{ctx}: {detail}"),
        }
    }

    pub fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: UiErrorKind::Parse,
            message: e.to_string(),
        }
    }
}

pub(crate) type UiResult<T> = Result<T, UiError>;
