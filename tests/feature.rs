use std::collections::BTreeMap;
use tempora::feature::{is_enabled, AuthContext, FeatureRules, FeatureToggle, Features};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rules(roles: &[&str], users: &[&str], env: &[&str]) -> FeatureToggle {
    FeatureToggle::Rules(FeatureRules {
        roles: owned(roles),
        users: owned(users),
        env: owned(env),
    })
}

fn registry() -> BTreeMap<String, FeatureToggle> {
    let mut toggles = BTreeMap::new();
    toggles.insert("always".to_string(), FeatureToggle::Flag(true));
    toggles.insert("never".to_string(), FeatureToggle::Flag(false));
    toggles.insert("admins".to_string(), rules(&["admin"], &[], &[]));
    toggles.insert("beta".to_string(), rules(&[], &["1", "2"], &["dev", "test"]));
    toggles
}

#[test]
fn test_flags() {
    let context = AuthContext::new("prod");
    assert!(is_enabled(Some(&FeatureToggle::Flag(true)), &context));
    assert!(!is_enabled(Some(&FeatureToggle::Flag(false)), &context));
    assert!(!is_enabled(None, &context));
}

#[test]
fn test_empty_rules_enable_everyone() {
    let context = AuthContext::new("prod");
    assert!(is_enabled(Some(&rules(&[], &[], &[])), &context));
}

#[test]
fn test_roles_rule() {
    let toggle = rules(&["admin", "editor"], &[], &[]);
    let editor = AuthContext::new("prod").with_role("viewer").with_role("editor");
    let viewer = AuthContext::new("prod").with_role("viewer");
    let nobody = AuthContext::new("prod");

    assert!(is_enabled(Some(&toggle), &editor));
    assert!(!is_enabled(Some(&toggle), &viewer));
    assert!(!is_enabled(Some(&toggle), &nobody));
}

#[test]
fn test_users_rule() {
    let toggle = rules(&[], &["7"], &[]);
    assert!(is_enabled(Some(&toggle), &AuthContext::new("prod").with_user("7")));
    assert!(!is_enabled(Some(&toggle), &AuthContext::new("prod").with_user("8")));
    assert!(!is_enabled(Some(&toggle), &AuthContext::new("prod")));
}

#[test]
fn test_rules_are_combined_with_and() {
    let toggle = rules(&["admin"], &["7"], &["prod"]);
    let everything = AuthContext::new("prod").with_user("7").with_role("admin");
    let wrong_env = AuthContext::new("dev").with_user("7").with_role("admin");
    let wrong_user = AuthContext::new("prod").with_user("9").with_role("admin");

    assert!(is_enabled(Some(&toggle), &everything));
    assert!(!is_enabled(Some(&toggle), &wrong_env));
    assert!(!is_enabled(Some(&toggle), &wrong_user));
}

#[test]
fn test_registry_lookup() {
    let toggles = registry();
    let features = Features::new(&toggles);
    let context = AuthContext::new("dev").with_user("2");

    assert_eq!(features.get_all().len(), 4);
    assert_eq!(features.get_one("always"), Some(&FeatureToggle::Flag(true)));
    assert!(features.is_enabled("always", &context));
    assert!(!features.is_enabled("never", &context));
    assert!(!features.is_enabled("admins", &context));
    assert!(features.is_enabled("beta", &context));
    assert!(!features.is_enabled("missing", &context));
}

#[test]
fn test_inline_rules_replace_configured_ones() {
    let toggles = registry();
    let features = Features::new(&toggles);
    let context = AuthContext::new("prod");

    assert!(features.is_enabled_with("never", &context, FeatureToggle::Flag(true), false));
    assert!(!features.is_enabled_with("always", &context, rules(&[], &[], &["dev"]), false));

    // The registry itself is unchanged
    assert!(!features.is_enabled("never", &context));
}

#[test]
fn test_inline_rules_merge_with_configured_ones() {
    let toggles = registry();
    let features = Features::new(&toggles);
    let staging_user = AuthContext::new("staging").with_user("1");

    // beta only lists dev and test; merging adds staging
    assert!(!features.is_enabled("beta", &staging_user));
    assert!(features.is_enabled_with("beta", &staging_user, rules(&[], &[], &["staging"]), true));

    // merged rules keep the configured user list
    let stranger = AuthContext::new("staging").with_user("5");
    assert!(!features.is_enabled_with("beta", &stranger, rules(&[], &[], &["staging"]), true));
}

#[test]
fn test_merge_semantics() {
    let merged = rules(&["admin"], &[], &["dev"]).merge(rules(&["editor", "admin"], &["3"], &[]));
    assert_eq!(merged, rules(&["admin", "editor"], &["3"], &["dev"]));

    assert_eq!(
        FeatureToggle::Flag(false).merge(rules(&["admin"], &[], &[])),
        rules(&["admin"], &[], &[])
    );
    assert_eq!(
        rules(&["admin"], &[], &[]).merge(FeatureToggle::Flag(true)),
        FeatureToggle::Flag(true)
    );
}

#[test]
fn test_toggle_from_json() {
    let toggle: FeatureToggle = serde_json::from_str(r#"{"roles": ["admin"], "users": [1, "2"]}"#).unwrap();
    assert_eq!(toggle, rules(&["admin"], &["1", "2"], &[]));

    let flag: FeatureToggle = serde_json::from_str("false").unwrap();
    assert_eq!(flag, FeatureToggle::Flag(false));
}

#[test]
fn test_misspelled_rule_key_is_rejected() {
    let result = serde_json::from_str::<FeatureToggle>(r#"{"role": ["admin"]}"#);
    assert!(result.is_err());
}
