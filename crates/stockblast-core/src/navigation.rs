//! # Navigation State
//!
//! Explicit stand-in for the browser location and history. Views read the
//! current [`Location`] and write back through a [`Navigator`], so they can be
//! driven without a browser.
//!
//! The query string doubles as application state: `?symbol=abc` on `/all`
//! selects a listing filter, and on `/history` it is forwarded to the API.
//! A parsed location keeps its query text exactly as written; only locations
//! built with [`Location::with_param`] or [`Location::with_single_param`]
//! re-encode it.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Path plus ordered query parameters of one navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
    /// `""` or `?<query>`, byte for byte as parsed or last rebuilt.
    search: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            search: String::new(),
        }
    }

    /// Parse a `path?query` string. Keys and values are percent-decoded;
    /// a `+` in the query reads as a space.
    pub fn parse(input: &str) -> Self {
        let (path, search) = match input.split_once('?') {
            Some((path, search)) => (path, search),
            None => (input, ""),
        };
        let path = if path.is_empty() { "/" } else { path };

        let query = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self {
            path: path.to_owned(),
            query,
            search: if search.is_empty() {
                String::new()
            } else {
                format!("?{search}")
            },
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self.search = encode_query(&self.query);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Same path with the query replaced by at most one parameter.
    ///
    /// An empty value strips the query entirely rather than leaving `?key=`.
    pub fn with_single_param(&self, key: &str, value: &str) -> Self {
        let query = if value.is_empty() {
            Vec::new()
        } else {
            vec![(key.to_owned(), value.to_owned())]
        };
        Self {
            path: self.path.clone(),
            search: encode_query(&query),
            query,
        }
    }

    /// `""` or `?...`: the parsed query text unmodified, or the percent-encoded
    /// pairs of a built location.
    pub fn search(&self) -> &str {
        &self.search
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.path, self.search())
    }
}

fn encode_query(query: &[(String, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>();
    format!("?{}", pairs.join("&"))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or(spaced)
}

/// Access to the current location and the navigation history.
pub trait Navigator {
    fn location(&self) -> &Location;

    /// Overwrite the current entry without growing history.
    fn replace(&mut self, location: Location);

    /// Push a new entry, as following a link does.
    fn assign(&mut self, location: Location);
}

/// In-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    entries: Vec<Location>,
}

impl MemoryNavigator {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn at(url: &str) -> Self {
        Self::new(Location::parse(url))
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(Location::new("/"))
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> &Location {
        // `entries` starts with one element and is never drained.
        &self.entries[self.entries.len() - 1]
    }

    fn replace(&mut self, location: Location) {
        log::debug!("replace location -> {location}");
        match self.entries.last_mut() {
            Some(current) => *current = location,
            None => self.entries.push(location),
        }
    }

    fn assign(&mut self, location: Location) {
        log::debug!("assign location -> {location}");
        self.entries.push(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_decodes_query() {
        let location = Location::parse("/all?name=acme%20co&industry=Health+Care");
        assert_eq!(location.path(), "/all");
        assert_eq!(location.get("name"), Some("acme co"));
        assert_eq!(location.get("industry"), Some("Health Care"));
        assert_eq!(location.get("symbol"), None);
    }

    #[test]
    fn parsed_search_is_kept_as_written() {
        let location = Location::parse("/history?symbol=aal&from=2020-03-01T00:00:00.000Z");
        assert_eq!(location.search(), "?symbol=aal&from=2020-03-01T00:00:00.000Z");
        assert_eq!(location.get("from"), Some("2020-03-01T00:00:00.000Z"));

        assert_eq!(Location::parse("/history?symbol=a+b").search(), "?symbol=a+b");
        assert_eq!(Location::parse("/history?symbol").search(), "?symbol");
        assert_eq!(Location::parse("/history?").search(), "");
        assert_eq!(
            Location::parse("/all?name=acme%20co").to_string(),
            "/all?name=acme%20co"
        );
    }

    #[test]
    fn empty_value_strips_query() {
        let location = Location::parse("/all?symbol=ab").with_single_param("symbol", "");
        assert_eq!(location.search(), "");
        assert_eq!(location.to_string(), "/all");
    }

    #[test]
    fn search_encodes_values() {
        let location = Location::new("/all").with_single_param("name", "acme co");
        assert_eq!(location.search(), "?name=acme%20co");
    }

    #[test]
    fn replace_keeps_history_length() {
        let mut navigator = MemoryNavigator::at("/all");
        navigator.replace(Location::parse("/all?symbol=a"));
        navigator.replace(Location::parse("/all?symbol=ab"));
        assert_eq!(navigator.history_len(), 1);
        assert_eq!(navigator.location().search(), "?symbol=ab");

        navigator.assign(Location::parse("/history?symbol=ab"));
        assert_eq!(navigator.history_len(), 2);
    }
}
