use std::collections::HashMap;

/// Case-insensitive HTTP header map.
///
/// Lookup ignores ASCII case; the spelling of the first insertion is kept for
/// emission. Inserting an existing name replaces both spelling and value
/// (last-write-wins).
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    // lowercased name -> (original spelling, value)
    entries: HashMap<String, (String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries
            .insert(name.to_ascii_lowercase(), (name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.values().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Parses a raw header block (everything before the blank-line separator,
/// request/status line already removed) into a [`HeaderMap`].
///
/// Each line is split on the first `:`; the value is trimmed. Lines without a
/// colon are skipped rather than failing the whole parse.
pub fn parse_header_block(block: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for line in block.split("\r\n") {
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim(), value.trim());
        }
    }

    headers
}

/// Parses a `Cookie` header value (`k1=v1; k2=v2`) into a name -> value map.
///
/// Fragments without `=` are dropped. Values are trimmed and stripped of any
/// embedded CR/LF left over from a corrupted wire read.
pub fn parse_cookie_header(value: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for fragment in value.split(';') {
        if let Some((name, value)) = fragment.split_once('=') {
            let value: String = value.trim().chars().filter(|c| *c != '\r' && *c != '\n').collect();
            cookies.insert(name.trim().to_string(), value);
        }
    }

    cookies
}
