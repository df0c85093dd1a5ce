//! Property tests for profile selection and planning.

use proptest::prelude::*;

use wjs_deploy::domain::entities::{Phase, StepAction};
use wjs_deploy::{plan_for, CommandToken, ProfileTable};

fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "deploy-prod-janeway".to_string(),
            "deploy-prod-wjs".to_string(),
            "deploy-pp-janeway".to_string(),
            "deploy-pp-wjs".to_string(),
            "deploy-dev-janeway".to_string(),
            "deploy-dev-wjs".to_string(),
        ]),
        "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}".prop_map(|t| format!("deploy-test-wjs:{}", t)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same token always yields the same profile and plan.
    #[test]
    fn property_selection_is_deterministic(raw in any_token()) {
        let token = CommandToken::parse(&raw).unwrap();
        let first = ProfileTable::builtin().select(&token).unwrap();
        let second = ProfileTable::builtin().select(&token).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(plan_for(&first), plan_for(&second));
    }

    /// PROPERTY: phases never go backwards and reload is always the last step.
    #[test]
    fn property_plan_phases_are_monotonic(raw in any_token()) {
        let token = CommandToken::parse(&raw).unwrap();
        let plan = plan_for(&ProfileTable::builtin().select(&token).unwrap());

        for pair in plan.steps.windows(2) {
            prop_assert!(pair[0].phase <= pair[1].phase);
        }
        let last = plan.steps.last().unwrap();
        prop_assert_eq!(last.phase, Phase::Reload);
        let is_touch = matches!(last.action, StepAction::Touch { .. });
        prop_assert!(is_touch);
        let touches = plan
            .steps
            .iter()
            .filter(|s| matches!(s.action, StepAction::Touch { .. }))
            .count();
        prop_assert_eq!(touches, 1);
    }

    /// PROPERTY: a pinned release is installed exactly as given.
    #[test]
    fn property_pinned_release_reaches_pip(tag in "[0-9]{1,2}\\.[0-9]{1,2}(rc[0-9])?") {
        let token = CommandToken::parse(&format!("deploy-test-wjs:{}", tag)).unwrap();
        let profile = ProfileTable::builtin().select(&token).unwrap();
        prop_assert_eq!(&profile.branch_name, &tag);
        let plan = plan_for(&profile);
        match &plan.steps[0].action {
            StepAction::Exec(cmd) => {
                let expected = format!("wjs.jcom_profile=={}", tag);
                prop_assert_eq!(cmd.args.last().unwrap(), &expected);
            }
            other => prop_assert!(false, "unexpected first step {:?}", other),
        }
    }
}
