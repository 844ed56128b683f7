use range_regex_core::domain::{EmptyRangePolicy, GroupStyle, WidthPolicy};
use range_regex_core::shared::{DomainError, RangeRegexError};
use range_regex_core::{GeneratorOptions, RangeRegex, range, range_or_empty};
use regex::Regex;

fn matches(pattern: &str, text: &str) -> bool {
    Regex::new(&format!("^(?:{pattern})$")).unwrap().is_match(text)
}

#[test]
fn five_to_five_matches_only_five() {
    let pattern = range(5, 5).unwrap();
    assert_eq!(pattern, "(5)");
    assert!(matches(&pattern, "5"));
    for other in ["4", "6", "0", "9"] {
        assert!(!matches(&pattern, other));
    }
}

#[test]
fn one_to_nine_is_one_class() {
    let pattern = range(1, 9).unwrap();
    assert_eq!(pattern, "([1-9])");
    let alternation = "(1|2|3|4|5|6|7|8|9)";
    for n in 0..10 {
        let text = n.to_string();
        assert_eq!(matches(&pattern, &text), matches(alternation, &text));
    }
}

#[test]
fn zero_to_ninety_nine_covers_two_digit_strings() {
    let pattern = range(0, 99).unwrap();
    for n in 0..100 {
        assert!(matches(&pattern, &format!("{n:02}")), "{n:02}");
    }
    assert!(!matches(&pattern, "100"));
    assert!(!matches(&pattern, "7"));
}

#[test]
fn forty_seven_to_two_ninety_three() {
    let pattern = range(47, 293).unwrap();
    assert_eq!(
        pattern,
        "(04[7-9]|0[5-9][0-9]|1[0-9][0-9]|2[0-8][0-9]|29[0-3])"
    );
    for n in 0..1000 {
        assert_eq!(matches(&pattern, &format!("{n:03}")), (47..=293).contains(&n));
    }
}

#[test]
fn reversed_bounds_follow_policy() {
    assert!(matches!(
        range(10, 1),
        Err(RangeRegexError::Domain(DomainError::InvalidRange { min: 10, max: 1 }))
    ));
    assert_eq!(range_or_empty(10, 1).unwrap(), "()");

    let non_capturing = RangeRegex::new(GeneratorOptions {
        empty: EmptyRangePolicy::EmptyGroup,
        group: GroupStyle::NonCapturing,
        ..GeneratorOptions::default()
    });
    let pattern = non_capturing.generate(10, 1).unwrap();
    assert_eq!(pattern.as_str(), "(?:)");
    assert!(pattern.is_empty());
    assert!(!matches(pattern.as_str(), "5"));
}

#[test]
fn unequal_widths_pad_to_max_by_default() {
    let pattern = range(5, 105).unwrap();
    assert_eq!(pattern, "(00[5-9]|0[1-9][0-9]|10[0-5])");
    assert!(matches(&pattern, "005"));
    assert!(matches(&pattern, "042"));
    assert!(matches(&pattern, "105"));
    assert!(!matches(&pattern, "5"));
    assert!(!matches(&pattern, "004"));
    assert!(!matches(&pattern, "106"));
}

#[test]
fn unequal_widths_without_padding() {
    let pattern = RangeRegex::from(WidthPolicy::Natural).generate(5, 105).unwrap();
    for n in 0..2000 {
        assert_eq!(
            matches(pattern.as_str(), &n.to_string()),
            (5..=105).contains(&n),
            "{n}"
        );
    }
    assert!(!matches(pattern.as_str(), "005"));
}

#[test]
fn negative_bounds_are_invalid_input() {
    for (min, max) in [(-1, 5), (0, -5), (-10, -1)] {
        let err = range(min, max).unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::InvalidInput { .. })));
    }
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = RangeRegex::default();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || generator.generate(i * 100, i * 100 + 57).unwrap().into_string()))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], "([0-4][0-9]|5[0-7])");
    assert_eq!(results[1], "(1[0-4][0-9]|15[0-7])");
}
