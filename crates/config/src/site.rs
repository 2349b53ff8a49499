use liquid_core::model::{Object, Value};

use super::*;

impl Settings {
    /// Expose the settings to theme templates.
    ///
    /// Keys follow the manifest names; optional settings that are not set are
    /// left out.
    pub fn to_liquid(&self) -> Object {
        let mut attributes = Object::new();
        attributes.insert("author".into(), Value::scalar(self.author().to_owned()));
        attributes.insert(
            "site_name".into(),
            Value::scalar(self.site_name().to_owned()),
        );
        attributes.insert("site_url".into(), Value::scalar(self.site_url().to_owned()));
        attributes.insert("timezone".into(), Value::scalar(self.timezone().to_owned()));
        attributes.insert(
            "default_language".into(),
            Value::scalar(self.default_language().to_owned()),
        );
        attributes.insert("theme".into(), Value::scalar(self.theme().to_owned()));
        if let Some(github_url) = self.github_url() {
            attributes.insert("github_url".into(), Value::scalar(github_url.to_owned()));
        }
        if let Some(rss) = self.rss_feed_path() {
            attributes.insert("rss_feed_path".into(), Value::scalar(rss.to_string()));
        }
        if let Some(feed_url) = self.feed_url() {
            attributes.insert("feed_url".into(), Value::scalar(feed_url));
        }
        if let Some(category_rss) = self.category_rss_feed_path() {
            attributes.insert(
                "category_rss_feed_path".into(),
                Value::scalar(category_rss.to_string()),
            );
        }
        attributes.insert("links".into(), links_to_liquid(self.links()));
        attributes.insert("social_links".into(), links_to_liquid(self.social_links()));
        attributes.insert(
            "pagination_enabled".into(),
            Value::scalar(self.pagination_enabled()),
        );
        if let Some(per_page) = self.per_page() {
            attributes.insert("per_page".into(), Value::scalar(i64::from(per_page)));
        }
        attributes
    }
}

fn links_to_liquid(links: &[Link]) -> Value {
    let links = links
        .iter()
        .map(|link| {
            let mut attributes = Object::new();
            attributes.insert("name".into(), Value::scalar(link.name().to_owned()));
            attributes.insert("url".into(), Value::scalar(link.url().to_owned()));
            Value::Object(attributes)
        })
        .collect();
    Value::Array(links)
}
