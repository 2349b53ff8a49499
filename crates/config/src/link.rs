use serde_yaml::Value;

use crate::MalformedConfigurationError;
use crate::error::describe;

/// An ordered `(name, url)` pair, as listed in the blogroll or social widget.
///
/// In the manifest a link is a two-element sequence: `[name, url]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Link(String, String);

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self(name.into(), url.into())
    }

    /// Display label, or the platform name for social links.
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> &str {
        &self.1
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }

    fn from_value(field: &str, value: &Value) -> Result<Self, MalformedConfigurationError> {
        let pair = value.as_sequence().ok_or_else(|| {
            MalformedConfigurationError::invalid(
                field,
                format!("expected a [name, url] pair, found {}", describe(value)),
            )
        })?;
        match pair.as_slice() {
            [name, url] => {
                let name = pair_element(field, "name", name)?;
                let url = pair_element(field, "url", url)?;
                Ok(Self(name, url))
            }
            _ => Err(MalformedConfigurationError::invalid(
                field,
                format!("expected 2 elements, found {}", pair.len()),
            )),
        }
    }
}

fn pair_element(
    field: &str,
    role: &str,
    value: &Value,
) -> Result<String, MalformedConfigurationError> {
    value.as_str().map(str::to_owned).ok_or_else(|| {
        MalformedConfigurationError::invalid(
            field,
            format!("{role} must be a string, found {}", describe(value)),
        )
    })
}

impl<N: Into<String>, U: Into<String>> From<(N, U)> for Link {
    fn from((name, url): (N, U)) -> Self {
        Self::new(name, url)
    }
}

/// Read an optional list of links, keeping manifest order.
pub(crate) fn links_from_value(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Vec<Link>, MalformedConfigurationError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let entries = value.as_sequence().ok_or_else(|| {
        MalformedConfigurationError::invalid(
            field,
            format!(
                "expected a sequence of [name, url] pairs, found {}",
                describe(value)
            ),
        )
    })?;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Link::from_value(&format!("{field}[{i}]"), entry))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(links_from_value("links", None).unwrap(), Vec::new());
    }

    #[test]
    fn order_is_preserved() {
        let value = yaml("[[a, u1], [b, u2]]");
        let links = links_from_value("links", Some(&value)).unwrap();
        assert_eq!(links, vec![Link::new("a", "u1"), Link::new("b", "u2")]);
        assert_eq!(links[0].as_pair(), ("a", "u1"));
    }

    #[test]
    fn three_elements_is_malformed() {
        let value = yaml("[[a, u1], [b, u2, extra]]");
        let err = links_from_value("links", Some(&value)).unwrap_err();
        assert_eq!(
            err,
            MalformedConfigurationError::invalid("links[1]", "expected 2 elements, found 3")
        );
    }

    #[test]
    fn one_element_is_malformed() {
        let value = yaml("[[a]]");
        assert!(links_from_value("social_links", Some(&value)).is_err());
    }

    #[test]
    fn non_string_url_is_malformed() {
        let value = yaml("[[a, 42]]");
        let err = links_from_value("links", Some(&value)).unwrap_err();
        assert_eq!(err.field(), Some("links[0]"));
    }

    #[test]
    fn scalar_entry_is_malformed() {
        let value = yaml("[http://example.com]");
        assert!(links_from_value("links", Some(&value)).is_err());
    }

    #[test]
    fn mapping_is_malformed() {
        let value = yaml("{a: u1}");
        let err = links_from_value("links", Some(&value)).unwrap_err();
        assert_eq!(err.field(), Some("links"));
    }

    #[test]
    fn serializes_as_pair() {
        let link = Link::from(("twitter", "http://twitter.com/electrobarn"));
        let text = serde_yaml::to_string(&link).unwrap();
        let pair: Vec<String> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(pair, ["twitter", "http://twitter.com/electrobarn"]);
    }
}
