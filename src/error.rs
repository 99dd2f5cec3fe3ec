pub type SiteResult<T> = Result<T, SiteError>;

/// Reasons a browser collaborator could not be reached. None of these are
/// fatal: callers log them and render the static presentation instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("no browser window in this rendering context")]
    NoWindow,

    #[error("element is not attached to the document")]
    Detached,

    #[error("browser API error: {0}")]
    Js(String),
}

impl SiteError {
    pub fn js(value: &wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            SiteError::NoWindow.to_string(),
            "no browser window in this rendering context"
        );
        assert_eq!(
            SiteError::Detached.to_string(),
            "element is not attached to the document"
        );
        assert!(SiteError::Js("boom".into())
            .to_string()
            .starts_with("browser API error:"));
    }
}
