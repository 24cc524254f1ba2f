use thiserror::Error;

/// Recoverable fault in one field's region of a difficulty blob.
///
/// Faults are collected and returned alongside the extracted record;
/// they never abort processing of the remaining keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldFault {
    #[error("malformed number for `{key}`: {text:?}")]
    BadNumber { key: &'static str, text: String },

    #[error("no value segment after `{key}`")]
    MissingValue { key: &'static str },

    #[error("missing `{component}` component for `{key}`")]
    MissingComponent { key: &'static str, component: char },

    #[error("no `[`..`]` span after `{key}`")]
    MissingBrackets { key: &'static str },
}

impl FieldFault {
    /// The wire key whose region produced this fault.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BadNumber { key, .. }
            | Self::MissingValue { key }
            | Self::MissingComponent { key, .. }
            | Self::MissingBrackets { key } => key,
        }
    }
}
