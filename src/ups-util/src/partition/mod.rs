//! Splits the environments of a set of applications into one shared map and
//! a residual map per application.
//!
//! A key is shared when every application that defines it uses the same
//! value and at least two applications define it. Any disagreement keeps the
//! key out of the shared map entirely; there is no majority vote.

mod index;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use index::KeyIndex;

/// Environment of a single application: key to value.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Environments of every application in one run, keyed by application name.
pub type EnvironmentSet = BTreeMap<String, EnvironmentMap>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    shared: EnvironmentMap,
    residuals: BTreeMap<String, EnvironmentMap>,
}

impl Partition {
    /// Computes the shared map and every residual map for `environments`.
    ///
    /// Pure function of its input: iteration order of applications or keys
    /// has no influence on the result.
    pub fn compute(environments: &EnvironmentSet) -> Self {
        let index = KeyIndex::build(environments);
        let shared = index.shared_entries();

        let residuals = environments
            .iter()
            .map(|(app, env)| (app.clone(), residual_of(env, &shared)))
            .collect();

        Self { shared, residuals }
    }

    pub fn shared(&self) -> &EnvironmentMap {
        &self.shared
    }

    /// Residual map of one application, `None` for an unknown application.
    pub fn residual(&self, app: &str) -> Option<&EnvironmentMap> {
        self.residuals.get(app)
    }

    /// All residual maps in ascending order of application name, empty ones included.
    pub fn residuals(&self) -> impl Iterator<Item = (&str, &EnvironmentMap)> {
        self.residuals.iter().map(|(app, env)| (app.as_str(), env))
    }

    /// Applications whose whole environment was absorbed into the shared map.
    pub fn fully_shared_apps(&self) -> impl Iterator<Item = &str> {
        self.residuals()
            .filter(|(_, env)| env.is_empty())
            .map(|(app, _)| app)
    }

    /// Rebuilds the original environment of `app` from the shared map and its residual.
    ///
    /// `original_keys` restricts the shared entries to the keys the application defined.
    pub fn reconstruct<'a, I>(&self, app: &str, original_keys: I) -> Option<EnvironmentMap>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let residual = self.residuals.get(app)?;
        let mut env = residual.clone();
        for key in original_keys {
            if env.contains_key(key) {
                continue;
            }
            if let Some(value) = self.shared.get(key) {
                env.insert(key.clone(), value.clone());
            }
        }
        Some(env)
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.residuals.values().all(BTreeMap::is_empty)
    }
}

/// Entries of `env` not covered by an identical entry in `shared`.
fn residual_of(env: &EnvironmentMap, shared: &EnvironmentMap) -> EnvironmentMap {
    env.iter()
        .filter(|(key, value)| shared.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
