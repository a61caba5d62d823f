use crate::Notice;

/// Why an action did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A request from this view is still in flight.
    Busy,
    /// A required input is empty; the notice says which.
    Invalid(Notice),
}

/// How a form input is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    /// Spans the full form width instead of half.
    pub wide: bool,
}

impl FieldSpec {
    pub fn label_text(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// Whitespace-only input counts as missing.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
