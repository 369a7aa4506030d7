use serde::Serialize;

/// District (tuman) inside a region. Codes are not unique within a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct District {
    pub code: String,
    pub name: String,
}

impl District {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
