//! Feature toggles
//!
//! A toggle is either a plain flag or a set of rules restricting a feature to
//! some roles, users and deployment environments. Evaluation is a pure function
//! of the toggle and an explicit [`AuthContext`]; nothing is read from global
//! application state.
//!
//! ```toml
//! [features]
//! new_dashboard = true
//! reports = { roles = ["admin"], env = ["prod"] }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single feature toggle entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureToggle {
    Flag(bool),
    Rules(FeatureRules),
}

/// Rule set for a feature; every non-empty list must be satisfied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureRules {
    /// Roles allowed to use the feature (any match is enough)
    pub roles: Vec<String>,
    /// User ids allowed to use the feature
    #[serde(deserialize_with = "deserialize_ids")]
    pub users: Vec<String>,
    /// Environments the feature is available in
    pub env: Vec<String>,
}

/// Who is asking, and where the application runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub roles: Vec<String>,
    pub user_id: Option<String>,
    pub environment: String,
}

impl AuthContext {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }
}

impl FeatureRules {
    /// Check every configured rule against the context
    pub fn allows(&self, context: &AuthContext) -> bool {
        if !self.roles.is_empty() && !context.roles.iter().any(|role| self.roles.contains(role)) {
            log::debug!("Feature denied: none of the roles {:?} granted", context.roles);
            return false;
        }

        if !self.users.is_empty() {
            let listed = context
                .user_id
                .as_ref()
                .is_some_and(|user_id| self.users.contains(user_id));
            if !listed {
                log::debug!("Feature denied: user {:?} not listed", context.user_id);
                return false;
            }
        }

        if !self.env.is_empty() && !self.env.contains(&context.environment) {
            log::debug!("Feature denied: environment '{}' not listed", context.environment);
            return false;
        }

        true
    }

    fn merge(mut self, other: FeatureRules) -> Self {
        extend_unique(&mut self.roles, other.roles);
        extend_unique(&mut self.users, other.users);
        extend_unique(&mut self.env, other.env);
        self
    }
}

impl FeatureToggle {
    /// Combine with an override: rule lists are appended, flags are replaced
    pub fn merge(self, other: FeatureToggle) -> FeatureToggle {
        match (self, other) {
            (FeatureToggle::Rules(base), FeatureToggle::Rules(extra)) => FeatureToggle::Rules(base.merge(extra)),
            (_, other) => other,
        }
    }
}

/// Evaluate a toggle for the given context; a missing toggle is disabled
pub fn is_enabled(toggle: Option<&FeatureToggle>, context: &AuthContext) -> bool {
    match toggle {
        None => false,
        Some(FeatureToggle::Flag(enabled)) => *enabled,
        Some(FeatureToggle::Rules(rules)) => rules.allows(context),
    }
}

/// Read-only view over the configured toggles
#[derive(Debug, Clone, Copy)]
pub struct Features<'a> {
    toggles: &'a BTreeMap<String, FeatureToggle>,
}

impl<'a> Features<'a> {
    pub fn new(toggles: &'a BTreeMap<String, FeatureToggle>) -> Self {
        Self { toggles }
    }

    pub fn get_all(&self) -> &'a BTreeMap<String, FeatureToggle> {
        self.toggles
    }

    pub fn get_one(&self, feature: &str) -> Option<&'a FeatureToggle> {
        self.toggles.get(feature)
    }

    pub fn is_enabled(&self, feature: &str, context: &AuthContext) -> bool {
        let toggle = self.get_one(feature);
        if toggle.is_none() {
            log::warn!("Unknown feature '{}', treating as disabled", feature);
        }
        is_enabled(toggle, context)
    }

    /// Evaluate with inline rules instead of, or merged into, the configured ones
    ///
    /// The configured toggles are left untouched.
    pub fn is_enabled_with(&self, feature: &str, context: &AuthContext, rules: FeatureToggle, merge: bool) -> bool {
        let effective = match (merge, self.get_one(feature)) {
            (true, Some(configured)) => configured.clone().merge(rules),
            _ => rules,
        };
        is_enabled(Some(&effective), context)
    }
}

fn extend_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for item in extra {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Accept user ids written either as strings or as integers
fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    let ids = Vec::<Id>::deserialize(deserializer)?;
    Ok(ids
        .into_iter()
        .map(|id| match id {
            Id::Text(text) => text,
            Id::Number(number) => number.to_string(),
        })
        .collect())
}
