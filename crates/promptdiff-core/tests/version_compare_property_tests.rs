//! Property tests for determinism, identity, and single-key additions.

mod common;

use common::version;
use promptdiff_core::{
    compare, extract_changes, serialize, summarize, ChangeKind, Content, Value as ContentValue,
};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = ContentValue> {
    let leaf = prop_oneof![
        Just(ContentValue::Null),
        any::<bool>().prop_map(ContentValue::Bool),
        any::<i64>().prop_map(ContentValue::Integer),
        (-1.0e6f64..1.0e6).prop_map(ContentValue::Float),
        "\\PC{0,16}".prop_map(ContentValue::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ContentValue::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| ContentValue::Mapping(entries.into_iter().collect())),
        ]
    })
}

fn content_strategy() -> impl Strategy<Value = Content> {
    prop::collection::vec(("[-+]{0,2}[a-z]{1,8}", value_strategy()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_serialize_is_deterministic(content in content_strategy()) {
        let v = version("v", 1, content.clone());
        let again = version("v", 1, content);
        prop_assert_eq!(serialize(&v).unwrap(), serialize(&again).unwrap());
    }

    #[test]
    fn prop_identical_content_has_no_diff(content in content_strategy()) {
        let old = version("old", 1, content.clone());
        let new = version("new", 2, content);
        let diff = compare(&old, &new).unwrap();
        prop_assert!(diff.is_empty());
        prop_assert!(extract_changes(&diff).is_empty());
        prop_assert_eq!(summarize(&extract_changes(&diff)), "");
    }

    #[test]
    fn prop_added_key_yields_only_additions(
        content in content_strategy(),
        added in value_strategy(),
    ) {
        let old = version("old", 1, content.clone());
        let new = version("new", 2, content.with("zz_added_key", added));
        let changes = extract_changes(&compare(&old, &new).unwrap());
        prop_assert!(changes.iter().any(|c| c.kind == ChangeKind::Addition));
        prop_assert!(changes.iter().all(|c| c.kind != ChangeKind::Deletion));
    }

    #[test]
    fn prop_extract_changes_is_idempotent(
        a in content_strategy(),
        b in content_strategy(),
    ) {
        let diff = compare(&version("a", 1, a), &version("b", 2, b)).unwrap();
        prop_assert_eq!(extract_changes(&diff), extract_changes(&diff));
    }

    #[test]
    fn prop_change_count_matches_marked_lines(
        a in content_strategy(),
        b in content_strategy(),
    ) {
        let diff = compare(&version("a", 1, a), &version("b", 2, b)).unwrap();
        let marked = diff
            .iter()
            .filter(|l| {
                (l.starts_with('+') && !l.starts_with("+++"))
                    || (l.starts_with('-') && !l.starts_with("---"))
            })
            .count();
        prop_assert_eq!(extract_changes(&diff).len(), marked);
    }

    #[test]
    fn prop_non_empty_diff_always_has_changes(
        a in content_strategy(),
        b in content_strategy(),
    ) {
        let diff = compare(&version("a", 1, a), &version("b", 2, b)).unwrap();
        let changes = extract_changes(&diff);
        prop_assert_eq!(diff.is_empty(), changes.is_empty());
        prop_assert_eq!(diff.is_empty(), summarize(&changes).is_empty());
    }
}
