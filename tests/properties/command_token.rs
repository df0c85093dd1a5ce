//! Property tests for command token parsing.

use proptest::prelude::*;

use wjs_deploy::{CommandToken, DeployError};

const FIXED: [&str; 6] = [
    "deploy-prod-janeway",
    "deploy-prod-wjs",
    "deploy-pp-janeway",
    "deploy-pp-wjs",
    "deploy-dev-janeway",
    "deploy-dev-wjs",
];

fn valid_tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9_-]{0,20}(\\.[A-Za-z0-9_-]{1,8}){0,3}")
        .unwrap()
}

fn hostile_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        ';', '&', '|', '$', '`', '\'', '"', ' ', '\t', '\n', '/', '\\', '<', '>', '(', ')', '*',
        '?', '~', '!', '#', '{', '}', '=', '%',
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,128}") {
        let _ = CommandToken::parse(&raw);
    }

    /// PROPERTY: anything accepted is one of the fixed tokens or the pinned form.
    #[test]
    fn property_only_enumerated_tokens_are_accepted(raw in "[a-z:.\\-0-9 ;]{0,40}") {
        if let Ok(token) = CommandToken::parse(&raw) {
            let canonical = token.to_string();
            prop_assert!(
                FIXED.contains(&canonical.as_str())
                    || canonical.starts_with("deploy-test-wjs:")
            );
            prop_assert_eq!(canonical, raw.trim());
        }
    }

    /// PROPERTY: valid tags are accepted and preserved exactly.
    #[test]
    fn property_valid_tags_round_trip(tag in valid_tag()) {
        let raw = format!("deploy-test-wjs:{}", tag);
        let token = CommandToken::parse(&raw).unwrap();
        prop_assert_eq!(token.release().unwrap().as_str(), tag.as_str());
    }

    /// PROPERTY: a tag containing any shell or path metacharacter is rejected.
    #[test]
    fn property_hostile_tags_are_rejected(
        prefix in valid_tag(),
        bad in hostile_char(),
        suffix in "[A-Za-z0-9 ;/$]{0,10}",
    ) {
        let raw = format!("deploy-test-wjs:{}{}{}", prefix, bad, suffix);
        let trimmed_is_clean = raw.trim_end().len() == format!("deploy-test-wjs:{}", prefix).len();
        // Trailing whitespace alone is trimmed and therefore harmless
        prop_assume!(!trimmed_is_clean);
        prop_assert!(
            matches!(
                CommandToken::parse(&raw),
                Err(DeployError::InvalidReleaseTag { .. })
            ),
            "accepted hostile token {:?}",
            raw
        );
    }

    /// PROPERTY: parsing is deterministic.
    #[test]
    fn property_parse_is_deterministic(idx in 0usize..FIXED.len()) {
        let a = CommandToken::parse(FIXED[idx]).unwrap();
        let b = CommandToken::parse(FIXED[idx]).unwrap();
        prop_assert_eq!(a, b);
    }
}
