use backstitch::patch::apply;
use backstitch::serialization::{FromScript, ToScript};
use backstitch::wagner_fischer::{diff, diff_lines, distance, Edit};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_diff_render_parse_apply_roundtrip(
        old in prop::collection::vec("[^|\n]*", 0..10),
        new in prop::collection::vec("[^|\n]*", 0..10),
    ) {
        let edits = diff(&old, &new).unwrap();
        let rendered = edits.to_script();
        let parsed = Vec::<Edit<String>>::from_script(&rendered).unwrap();
        let result = apply(&old, &parsed);
        prop_assert_eq!(result, Ok(new));
    }

    #[test]
    fn test_distance_is_a_metric(
        a in prop::collection::vec(any::<u8>(), 0..15),
        b in prop::collection::vec(any::<u8>(), 0..15),
        c in prop::collection::vec(any::<u8>(), 0..15),
    ) {
        prop_assert_eq!(distance(&a, &a), 0);
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }
}

#[test]
fn test_replaced_lines_render() {
    let old = "aaa\nbbb\nccc";
    let new = "ccc\nbbb\naaa";
    let edits = diff_lines(old, new).unwrap();
    assert_eq!(edits.to_script(), "1 * aaa|ccc\n2   bbb\n3 * ccc|aaa\n");
}

#[test]
fn test_apply_parsed_script() {
    let old = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let script = "1   one\n2 * two|2\n3 - three\n4 + four\n";
    let edits = Vec::<Edit<String>>::from_script(script).unwrap();
    let result = apply(&old, &edits).unwrap();
    assert_eq!(
        result,
        vec!["one".to_string(), "2".to_string(), "four".to_string()]
    );
}
