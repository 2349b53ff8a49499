static SLUG_INVALID_CHARS: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"([^a-zA-Z0-9]+)").unwrap());

/// Create a URL-safe slug, e.g. for a category's feed path.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let name = deunicode::deunicode_with_tofu(name, "-");
    let slug = SLUG_INVALID_CHARS.replace_all(&name, "-");
    slug.trim_matches('-').to_lowercase()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slugify() {
        let actual = slugify("___Robots and--Pencils___");
        assert_eq!(actual, "robots-and-pencils");
    }

    #[test]
    fn test_slugify_unicode() {
        let actual = slugify("Électronique & Café");
        assert_eq!(actual, "electronique-cafe");
    }

    #[test]
    fn test_slugify_only_symbols() {
        assert_eq!(slugify("!!!"), "");
    }
}
