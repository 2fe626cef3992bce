//! Page location access
//!
//! Token query parameters are read once and then removed from the visible
//! address without navigating. Implementations only need to expose the
//! current URL and a way to replace it in place; parameter lookup and
//! stripping are built on top with `url`.

use crate::error::{Error, Result};
use url::Url;

/// The page's address bar
pub trait Location {
    /// The full current URL
    fn href(&self) -> Result<String>;

    /// Replace the visible URL without reloading the page
    fn replace_url(&mut self, href: &str) -> Result<()>;

    /// Read a non-empty query parameter
    fn query_param(&self, name: &str) -> Result<Option<String>> {
        let url = parse_url(&self.href()?)?;
        Ok(find_param(&url, name))
    }

    /// Remove every parameter named in `names` from the visible URL
    ///
    /// Returns `true` if the URL was rewritten. Nothing is written when none
    /// of the parameters are present.
    fn strip_query_params(&mut self, names: &[String]) -> Result<bool> {
        let url = parse_url(&self.href()?)?;
        match strip_params(&url, names) {
            Some(cleaned) => {
                self.replace_url(cleaned.as_str())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Parse an absolute page URL
pub(crate) fn parse_url(href: &str) -> Result<Url> {
    href.parse::<Url>()
        .map_err(|e| Error::UrlInvalid(format!("{href}: {e}")))
}

/// First value of `name` in the query, ignoring empty values
pub(crate) fn find_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Copy of `url` without the named query parameters, or `None` if none occur
pub(crate) fn strip_params(url: &Url, names: &[String]) -> Option<Url> {
    let is_stripped = |key: &str| names.iter().any(|name| name == key);

    if !url.query_pairs().any(|(key, _)| is_stripped(key.as_ref())) {
        return None;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_stripped(key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut cleaned = url.clone();
    if kept.is_empty() {
        cleaned.set_query(None);
    } else {
        cleaned.query_pairs_mut().clear().extend_pairs(kept);
    }
    Some(cleaned)
}

/// In-memory [`Location`]
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    href: String,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            replacements: 0,
        }
    }

    /// Current URL
    pub fn url(&self) -> &str {
        &self.href
    }

    /// Number of in-place URL replacements performed
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> Result<String> {
        Ok(self.href.clone())
    }

    fn replace_url(&mut self, href: &str) -> Result<()> {
        self.href = href.to_string();
        self.replacements += 1;
        Ok(())
    }
}
