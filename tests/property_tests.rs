use proptest::prelude::*;
use sweep::scanner::{PatternSet, matches, normalize};

proptest! {
    #[test]
    fn test_empty_set_never_matches(candidate in ".*") {
        prop_assert!(!matches::<&str>(&[], &candidate).unwrap());
        prop_assert!(!PatternSet::empty().is_match(&candidate));
    }

    #[test]
    fn test_backslashes_equal_slashes(
        parts in prop::collection::vec("[a-z_.]{1,6}", 1..5),
        backslash_mask in prop::collection::vec(any::<bool>(), 5),
    ) {
        // Build the same path with a random mix of separators
        let mut mixed = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                mixed.push(if backslash_mask[i] { '\\' } else { '/' });
            }
            mixed.push_str(part);
        }
        let forward = mixed.replace('\\', "/");

        let set = PatternSet::new([r"^[a-z_.]+/.*", r".*\.py$", "^_"]).unwrap();
        prop_assert_eq!(set.is_match(&mixed), set.is_match(&forward));
        prop_assert_eq!(normalize(&mixed), forward.as_str());
    }

    #[test]
    fn test_literal_prefix_matches(prefix in "[a-z]{1,8}", rest in "[a-z/]{0,12}") {
        // A plain literal pattern matches every candidate it prefixes
        let candidate = format!("{prefix}{rest}");
        prop_assert!(matches(&[prefix.as_str()], &candidate).unwrap());
    }

    #[test]
    fn test_anchored_literal_is_exact(name in "[a-z]{1,8}", suffix in "[a-z/]{1,8}") {
        let pattern = format!("^{name}$");
        let set = PatternSet::new([pattern.as_str()]).unwrap();
        prop_assert!(set.is_match(&name));
        let longer = format!("{name}{suffix}");
        prop_assert!(!set.is_match(&longer));
    }
}
