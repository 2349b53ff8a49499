use std::fmt;
use std::path;
use std::str::FromStr;

use serde_yaml::Value;

use super::*;
use crate::error::describe;
use crate::link::links_from_value;

/// File name the site generator looks for.
pub const MANIFEST_FILE: &str = "site.yml";

/// Settings as written, before any shape checks.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
struct RawSettings {
    author: Option<Value>,
    site_name: Option<Value>,
    site_url: Option<Value>,
    timezone: Option<Value>,
    default_language: Option<Value>,
    theme: Option<Value>,
    github_url: Option<Value>,
    rss_feed_path: Option<Value>,
    category_rss_feed_path: Option<Value>,
    links: Option<Value>,
    social_links: Option<Value>,
    pagination_enabled: Option<Value>,
    per_page: Option<Value>,
}

/// The loaded site manifest.
///
/// A `Settings` is only produced by loading a manifest and exposes no way to
/// change it afterwards. Reload the manifest to pick up edits.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    author: String,
    site_name: String,
    site_url: String,
    timezone: String,
    default_language: String,
    theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rss_feed_path: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_rss_feed_path: Option<RelPath>,
    links: Vec<Link>,
    social_links: Vec<Link>,
    #[serde(flatten)]
    pagination: Pagination,
}

impl Settings {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Settings> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Settings> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        content.parse::<Settings>().map_err(|e| {
            Status::new("Failed to parse config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })
    }

    /// Load the nearest `site.yml` in `cwd` or one of its ancestors.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Settings> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Settings> {
        let file_path = find_project_file(&cwd, MANIFEST_FILE).ok_or_else(|| {
            Status::new("No site.yml found")
                .context_with(|c| c.insert("Path", cwd.display().to_string()))
        })?;
        log::debug!("Using config file `{}`", file_path.display());
        Self::from_file(file_path)
    }

    fn from_raw(raw: RawSettings) -> Result<Settings, MalformedConfigurationError> {
        let RawSettings {
            author,
            site_name,
            site_url,
            timezone,
            default_language,
            theme,
            github_url,
            rss_feed_path,
            category_rss_feed_path,
            links,
            social_links,
            pagination_enabled,
            per_page,
        } = raw;

        let settings = Settings {
            author: required_string("author", author.as_ref())?,
            site_name: required_string("site_name", site_name.as_ref())?,
            site_url: required_string("site_url", site_url.as_ref())?,
            timezone: required_string("timezone", timezone.as_ref())?,
            default_language: required_string("default_language", default_language.as_ref())?,
            theme: required_string("theme", theme.as_ref())?,
            github_url: optional_string("github_url", github_url.as_ref())?,
            rss_feed_path: optional_path("rss_feed_path", rss_feed_path.as_ref())?,
            category_rss_feed_path: optional_path(
                "category_rss_feed_path",
                category_rss_feed_path.as_ref(),
            )?,
            links: links_from_value("links", links.as_ref())?,
            social_links: links_from_value("social_links", social_links.as_ref())?,
            pagination: Pagination::from_values(pagination_enabled.as_ref(), per_page.as_ref())?,
        };

        if let Some(template) = &settings.category_rss_feed_path {
            if category_placeholder(template.as_str()).is_none() {
                return Err(MalformedConfigurationError::invalid(
                    "category_rss_feed_path",
                    "expected a `%s` or `{slug}` placeholder for the category",
                ));
            }
        }

        log::trace!(
            "Loaded settings for `{}` with theme `{}`",
            settings.site_name,
            settings.theme
        );
        Ok(settings)
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Canonical base URL, as written.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// IANA timezone name used for date formatting.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    pub fn rss_feed_path(&self) -> Option<&RelPath> {
        self.rss_feed_path.as_ref()
    }

    pub fn category_rss_feed_path(&self) -> Option<&RelPath> {
        self.category_rss_feed_path.as_ref()
    }

    /// The blogroll.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn social_links(&self) -> &[Link] {
        &self.social_links
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn pagination_enabled(&self) -> bool {
        self.pagination.is_enabled()
    }

    pub fn per_page(&self) -> Option<u32> {
        self.pagination.per_page()
    }

    /// Absolute URL of the site-wide feed.
    pub fn feed_url(&self) -> Option<String> {
        self.rss_feed_path
            .as_ref()
            .map(|path| format!("{}/{}", self.site_url.trim_end_matches('/'), path))
    }

    /// Feed path for `category`, with the category slugified into the template.
    pub fn category_feed_path(&self, category: &str) -> Option<String> {
        let template = self.category_rss_feed_path.as_ref()?.as_str();
        let placeholder = category_placeholder(template)?;
        Some(template.replacen(placeholder, &slug::slugify(category), 1))
    }
}

impl FromStr for Settings {
    type Err = MalformedConfigurationError;

    /// Load a manifest from its YAML text.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| MalformedConfigurationError::Syntax(e.to_string()))?
        };
        Self::from_raw(raw)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn required_string(
    field: &'static str,
    value: Option<&Value>,
) -> Result<String, MalformedConfigurationError> {
    optional_string(field, value)?.ok_or(MalformedConfigurationError::MissingField(field))
}

fn optional_string(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, MalformedConfigurationError> {
    value
        .map(|value| {
            value.as_str().map(str::to_owned).ok_or_else(|| {
                MalformedConfigurationError::invalid(
                    field,
                    format!("expected a string, found {}", describe(value)),
                )
            })
        })
        .transpose()
}

fn optional_path(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<RelPath>, MalformedConfigurationError> {
    optional_string(field, value)?
        .map(|path| {
            RelPath::try_from(path.as_str())
                .map_err(|reason| MalformedConfigurationError::invalid(field, reason))
        })
        .transpose()
}

fn category_placeholder(template: &str) -> Option<&'static str> {
    ["%s", "{slug}"]
        .into_iter()
        .find(|placeholder| template.contains(placeholder))
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
