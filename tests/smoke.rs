//! Smoke tests over the public API: the documented properties of the
//! reduction, the calculators, and the pair scanner, exercised together.

use shushu::birthdate::{fixed_number, life_path_number, MalformedDate};
use shushu::pairs::scan;
use shushu::reduce::reduce;
use shushu::reference::{archetype_for, lookup_pair, Category, REFERENCE_TABLE};
use shushu::report::{LabeledString, LocalAnalysis};

#[test]
fn reduction_is_total_and_in_range() {
    for n in 1..100_000u32 {
        let r = reduce(n);
        assert!((1..=9).contains(&r.value), "reduce({}) = {}", n, r.value);
        if n <= 9 {
            assert_eq!(r.value, n);
            assert!(r.steps.is_empty());
        }
    }
}

#[test]
fn reduction_matches_digital_root() {
    // The digital root has a closed form: 1 + (n - 1) % 9 for n > 0.
    for n in 1..10_000u32 {
        assert_eq!(reduce(n).value, 1 + (n - 1) % 9);
    }
}

#[test]
fn every_listed_combination_resolves_to_its_own_group() {
    for group in &REFERENCE_TABLE {
        for combo in &group.combinations {
            let found = lookup_pair(combo).expect("listed combination must match");
            assert_eq!(found.name, group.name);
        }
    }
}

#[test]
fn concealed_zero_leaves_only_the_following_pair() {
    let matches = scan("014");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].pair, "14");
    assert_eq!(matches[0].combination.category, Category::Auspicious);
}

#[test]
fn bridge_digit_forms_three_char_pair() {
    let matches = scan("752");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].pair, "752");
    assert!(matches[0].combination.name.contains("Tian Yi"));
    assert!(matches[0].note.is_some());
}

#[test]
fn repeated_digit_pair_matches_fu_wei() {
    let matches = scan("99");
    assert_eq!(matches.len(), 1);
    assert!(matches[0].combination.name.contains("Fu Wei"));
}

#[test]
fn life_path_of_known_date() {
    let lp = life_path_number("1990-05-15").unwrap();
    assert_eq!(lp.value, 3);
    assert!(lp.steps.contains(&"3 + 0 = 3".to_string()));
}

#[test]
fn fixed_number_of_known_date() {
    assert_eq!(fixed_number("1990-05-15").unwrap().value, 2);
}

#[test]
fn short_date_is_always_an_error() {
    for bad in ["1990-1", "", "abc", "1-2-3"] {
        assert!(
            matches!(life_path_number(bad), Err(MalformedDate::TooFewDigits { .. })),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn scans_are_deterministic_and_independent() {
    // Pure functions: same input, same output, any call order.
    let a = scan("0912345678");
    let _ = scan("99999");
    let b = scan("0912345678");
    assert_eq!(a, b);
}

#[test]
fn local_analysis_end_to_end() {
    let strings = vec![
        LabeledString { label: "Phone".into(), value: "0952-148-367".into() },
        LabeledString { label: "Plate".into(), value: "BNM-2099".into() },
    ];
    let local = LocalAnalysis::compute("Chen Wei", "1988/12/03", &strings).unwrap();

    // 1+9+8+8=26, 1+2=3, 0+3=3, total 32 -> 3+2 = 5
    assert_eq!(local.life_path_value, 5);
    assert_eq!(local.life_path_archetype, archetype_for(5).unwrap().archetype);
    // month 12 + day 3 = 15 -> 1+5 = 6
    assert_eq!(local.fixed_value, 6);

    // Serializes cleanly for rendering.
    let json = serde_json::to_value(&local).unwrap();
    assert_eq!(json["subject"], "Chen Wei");
    assert!(json["scans"].as_array().unwrap().len() == 2);
}
