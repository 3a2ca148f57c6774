//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::path::SeparatorStyle;
use proptest::prelude::*;

fn separator_strategy() -> impl Strategy<Value = SeparatorStyle> {
    prop_oneof![Just(SeparatorStyle::Unix), Just(SeparatorStyle::Windows)]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of("[A-Za-z ]{0,20}"),
        prop::option::of(separator_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(check_existence, dot_enabled, not_found, separator, expand_tilde)| Config {
                check_existence,
                dot_enabled,
                not_found,
                separator,
                expand_tilde,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Configuration merging preserves set values from higher precedence
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.check_existence, high.check_existence.or(low.check_existence));
        prop_assert_eq!(result.dot_enabled, high.dot_enabled.or(low.dot_enabled));
        prop_assert_eq!(result.not_found, high.not_found.or(low.not_found));
        prop_assert_eq!(result.separator, high.separator.or(low.separator));
        prop_assert_eq!(result.expand_tilde, high.expand_tilde.or(low.expand_tilde));
    }

    // Merging an empty config is the identity
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging is idempotent
    #[test]
    fn config_merge_idempotent(base in config_strategy(), over in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &over);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &over);
        prop_assert_eq!(once, twice);
    }

    // YAML output parses back to the same config
    #[test]
    fn config_yaml_survives_reparse(config in config_strategy()) {
        let yaml = config.to_yaml().unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Generated configs never contain line breaks, so they always validate
    #[test]
    fn config_without_line_breaks_validates(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // The effective config is a fixed point
    #[test]
    fn config_effective_is_stable(config in config_strategy()) {
        let effective = config.effective();
        prop_assert_eq!(effective.effective(), effective.clone());
        prop_assert_eq!(effective.to_options(), config.to_options().with_separator(config.to_options().separator_style()));
    }
}
