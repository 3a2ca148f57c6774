//! Property-based tests for path handling.
//!
//! Note: The normalize and segments modules carry light property tests of
//! their own. This module exercises the resolver end to end with many more
//! cases.

use super::normalize::collapse;
use super::{Operation, PathResolver, ResolverOptions, SeparatorStyle};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z0-9]{1,4})?"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => path_component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ],
        1..8,
    )
    .prop_map(|parts| parts.join("/"))
}

fn resolver(style: SeparatorStyle) -> PathResolver {
    PathResolver::with_working_dir(
        ResolverOptions::default().with_separator(style),
        "/w/x/y/z/v/u/t/s",
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent in the host style: normalize(normalize(p)) == normalize(p).
    // A foreign style only changes rendering, so its output is not a host path.
    #[test]
    fn normalize_idempotent(input in relative_path_strategy()) {
        let resolver = resolver(SeparatorStyle::host());
        if let Ok(once) = resolver.try_normalize(&input) {
            prop_assert_eq!(resolver.try_normalize(&once).unwrap(), once);
        }
    }

    // Normalized output never contains dot segments
    #[test]
    fn normalized_paths_have_no_dot_segments(input in relative_path_strategy()) {
        if let Ok(normalized) = resolver(SeparatorStyle::Unix).try_normalize(&input) {
            prop_assert!(normalized.starts_with('/'));
            prop_assert!(normalized.split('/').all(|s| s != "." && s != ".."));
        }
    }

    // Windows rendering is the Unix rendering with swapped separators
    #[test]
    fn windows_rendering_mirrors_unix(input in relative_path_strategy()) {
        let unix = resolver(SeparatorStyle::Unix).try_normalize(&input);
        let windows = resolver(SeparatorStyle::Windows).try_normalize(&input);
        match (unix, windows) {
            (Ok(u), Ok(w)) => prop_assert_eq!(u.replace('/', "\\"), w),
            (Err(_), Err(_)) => {}
            (u, w) => prop_assert!(false, "diverged: {:?} vs {:?}", u, w),
        }
    }

    // name(path(p)) == name(p) whenever both succeed
    #[test]
    fn name_of_path_is_name(input in relative_path_strategy()) {
        let resolver = resolver(SeparatorStyle::host());
        if let (Ok(path), Ok(name)) = (resolver.try_path(&input), resolver.try_name(&input)) {
            prop_assert_eq!(resolver.try_name(&path).unwrap(), name);
        }
    }

    // base_name + "." + extension recomposes name when there is an extension
    #[test]
    fn base_and_extension_recompose_name(input in relative_path_strategy()) {
        let resolver = resolver(SeparatorStyle::host());
        if let Ok(name) = resolver.try_name(&input) {
            let base = resolver.base_name(&input);
            let ext = resolver.extension(&input);
            if ext.is_empty() {
                prop_assert_eq!(base, name);
            } else {
                prop_assert_eq!(format!("{base}.{ext}"), name);
            }
        }
    }

    // Every operation is total over arbitrary input
    #[test]
    fn string_operations_total(input in ".{0,40}") {
        let resolver = resolver(SeparatorStyle::host());
        for op in Operation::ALL {
            let _ = op.apply(&resolver, &input);
        }
    }

    // The textual collapse agrees with the resolver on absolute inputs
    #[test]
    fn collapse_matches_resolver(input in relative_path_strategy()) {
        let resolver = resolver(SeparatorStyle::Unix);
        let absolute = format!("/w/x/y/z/v/u/t/s/{input}");
        prop_assert_eq!(
            collapse(&absolute, SeparatorStyle::Unix).ok(),
            resolver.try_normalize(&input).ok()
        );
    }
}
