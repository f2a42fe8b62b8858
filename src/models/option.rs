use serde::{Deserialize, Serialize};

/// A selectable candidate.
///
/// `value` is the identity key; `label` is both the matched and the displayed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboOption {
    pub label: String,
    pub value: String,
}

impl ComboOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }

    /// Stand-in for a caller record that could not be rendered.
    pub fn placeholder() -> Self {
        Self { label: String::new(), value: String::new() }
    }

    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }

    /// Element id used by hosts for the active-descendant reference.
    pub fn element_id(&self) -> String {
        format!("option-{}", self.value)
    }
}
