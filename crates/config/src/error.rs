/// The manifest is missing a required setting or a value has the wrong shape.
///
/// There is no recovery path: the build should abort and surface this to the
/// operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MalformedConfigurationError {
    /// A required key is absent or null.
    #[error("missing required setting `{0}`")]
    MissingField(&'static str),
    #[error("setting `{field}` is malformed: {reason}")]
    InvalidShape { field: String, reason: String },
    /// The manifest is not a YAML mapping.
    #[error("manifest is not a valid settings document: {0}")]
    Syntax(String),
}

impl MalformedConfigurationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The setting this error refers to, when it is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) => Some(field),
            Self::InvalidShape { field, .. } => Some(field),
            Self::Syntax(_) => None,
        }
    }
}

pub(crate) fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = MalformedConfigurationError::MissingField("theme");
        assert_eq!(err.to_string(), "missing required setting `theme`");
        assert_eq!(err.field(), Some("theme"));
    }

    #[test]
    fn invalid_shape_display() {
        let err = MalformedConfigurationError::invalid("links[0]", "expected 2 elements, found 3");
        assert_eq!(
            err.to_string(),
            "setting `links[0]` is malformed: expected 2 elements, found 3"
        );
        assert_eq!(err.field(), Some("links[0]"));
    }

    #[test]
    fn syntax_has_no_field() {
        let err = MalformedConfigurationError::Syntax("bad".to_owned());
        assert_eq!(err.field(), None);
    }
}
