use std::collections::{HashMap, HashSet};

use super::{EnvironmentMap, EnvironmentSet};

/// What one key looks like across all applications.
#[derive(Debug, Default)]
struct KeyUsage<'a> {
    values: HashSet<&'a str>,
    apps: HashSet<&'a str>,
}

impl KeyUsage<'_> {
    /// The single value of a key defined identically by two or more applications.
    fn shared_value(&self) -> Option<&str> {
        if self.values.len() != 1 || self.apps.len() < 2 {
            return None;
        }
        self.values.iter().next().copied()
    }
}

/// Inverted index over an [`EnvironmentSet`], built in one pass.
#[derive(Debug, Default)]
pub(super) struct KeyIndex<'a> {
    keys: HashMap<&'a str, KeyUsage<'a>>,
}

impl<'a> KeyIndex<'a> {
    pub(super) fn build(environments: &'a EnvironmentSet) -> Self {
        Self::from_entries(environments.iter().flat_map(|(app, env)| {
            env.iter()
                .map(move |(key, value)| (app.as_str(), key.as_str(), value.as_str()))
        }))
    }

    /// Indexes `(app, key, value)` entries in whatever order they arrive.
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut keys: HashMap<&'a str, KeyUsage<'a>> = HashMap::new();
        for (app, key, value) in entries {
            let usage = keys.entry(key).or_default();
            usage.values.insert(value);
            usage.apps.insert(app);
        }
        Self { keys }
    }

    pub(super) fn shared_entries(&self) -> EnvironmentMap {
        self.keys
            .iter()
            .filter_map(|(key, usage)| {
                usage
                    .shared_value()
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .collect()
    }
}
