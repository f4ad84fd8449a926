use webwatch_core::{
    ComparisonStrategy, ExactCompare, SizeCompare, StrategyKind, TextOnlyCompare,
};

#[test]
fn size_compare_flags_every_length_difference() {
    let strategy = SizeCompare;
    let cases = [
        ("", "x"),
        ("short", "longer text"),
        ("<html></html>", "<html><body></body></html>"),
    ];
    for (a, b) in cases {
        assert!(strategy.changed(a, b), "{a:?} vs {b:?} should differ");
        assert!(strategy.changed(b, a), "symmetry for {a:?} vs {b:?}");
    }
}

#[test]
fn equal_strings_are_never_changed() {
    for text in ["", "plain", "<b>hi</b>", "multi\nline"] {
        assert!(!ExactCompare.changed(text, text));
        assert!(!TextOnlyCompare.changed(text, text));
        assert!(!SizeCompare.changed(text, text));
    }
}

#[test]
fn text_only_compare_sees_through_markup() {
    let strategy = TextOnlyCompare;
    assert!(!strategy.changed("<b>hi</b>", "hi"));
    assert!(strategy.changed("<b>hi</b>", "<i>bye</i>"));
    assert!(!strategy.changed("<p>a</p><p>b</p>", "ab"));
}

#[test]
fn exact_compare_is_byte_sensitive() {
    assert!(ExactCompare.changed("a b", "a  b"));
    assert!(ExactCompare.changed("case", "Case"));
}

#[test]
fn strategy_descriptions_are_distinct_and_stable() {
    let names = [
        StrategyKind::Size.describe(),
        StrategyKind::Exact.describe(),
        StrategyKind::TextOnly.describe(),
    ];
    assert_eq!(names[0], "Content size comparison");
    assert_eq!(names[1], "Exact HTML content comparison");
    assert_eq!(names[2], "Extracted text content comparison");
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
}

#[test]
fn menu_fallback_lands_on_exact() {
    for out_of_range in [0, 4, 17, u32::MAX] {
        assert_eq!(
            StrategyKind::from_menu_choice(out_of_range),
            StrategyKind::Exact
        );
    }
}
