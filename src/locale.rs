use fnv::FnvHashMap;

/// Host translation bundle.
pub trait Bundle {
    /// Translation for `key`, or `fallback` when the bundle has none.
    fn get(&self, key: &str, fallback: &str) -> String;

    /// Look up one of the `(key, fallback)` pairs in `constants::bundle`.
    fn text(&self, entry: (&str, &str)) -> String {
        self.get(entry.0, entry.1)
    }
}

/// A fixed key/value bundle, used when the host has no translations loaded.
#[derive(Clone, Debug, Default)]
pub struct StaticBundle {
    entries: FnvHashMap<String, String>,
}

impl StaticBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Bundle for StaticBundle {
    fn get(&self, key: &str, fallback: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}
