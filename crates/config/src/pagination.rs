use serde_yaml::Value;

use crate::MalformedConfigurationError;
use crate::error::describe;

pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Pagination {
    #[serde(rename = "pagination_enabled")]
    enabled: bool,
    per_page: u32,
}

impl Pagination {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Items per page, or `None` when pagination is disabled.
    pub fn per_page(&self) -> Option<u32> {
        self.enabled.then_some(self.per_page)
    }

    pub(crate) fn from_values(
        enabled: Option<&Value>,
        per_page: Option<&Value>,
    ) -> Result<Self, MalformedConfigurationError> {
        let enabled = match enabled {
            None => true,
            Some(Value::Bool(enabled)) => *enabled,
            Some(other) => {
                return Err(MalformedConfigurationError::invalid(
                    "pagination_enabled",
                    format!("expected a boolean, found {}", describe(other)),
                ));
            }
        };
        let per_page = match per_page {
            None => DEFAULT_PER_PAGE,
            Some(value) => {
                let per_page = value
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        MalformedConfigurationError::invalid(
                            "per_page",
                            format!("expected a positive integer, found {}", describe(value)),
                        )
                    })?;
                if !enabled {
                    log::warn!("`per_page` is ignored because pagination is disabled");
                }
                per_page
            }
        };
        Ok(Self { enabled, per_page })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            enabled: true,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        let pagination = Pagination::from_values(None, None).unwrap();
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.per_page(), Some(DEFAULT_PER_PAGE));
    }

    #[test]
    fn disabled_has_no_page_size() {
        let pagination = Pagination::from_values(Some(&Value::Bool(false)), None).unwrap();
        assert!(!pagination.is_enabled());
        assert_eq!(pagination.per_page(), None);
    }

    #[test]
    fn custom_page_size() {
        let per_page = Value::from(5_u64);
        let pagination = Pagination::from_values(None, Some(&per_page)).unwrap();
        assert_eq!(pagination.per_page(), Some(5));
    }

    #[test]
    fn zero_page_size_is_malformed() {
        let per_page = Value::from(0_u64);
        assert!(Pagination::from_values(None, Some(&per_page)).is_err());
    }

    #[test]
    fn string_flag_is_malformed() {
        let enabled = Value::String("no".to_owned());
        let err = Pagination::from_values(Some(&enabled), None).unwrap_err();
        assert_eq!(err.field(), Some("pagination_enabled"));
    }
}
