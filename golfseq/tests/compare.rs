mod common;

use std::cmp::Ordering;

use common::text;
use golfseq::prelude::*;

#[test]
fn lexicographic_ordering() {
    let pairs = [("apple", "banana"), ("apple", "apply"), ("apple", "apples"), ("", "apple")];
    for (lesser, greater) in pairs {
        let x = text(lesser);
        let y = text(greater);
        assert!(x < y, "{lesser} < {greater}");
        assert!(x <= y);
        assert!(y > x);
        assert!(y >= x);
        assert!(!(y < x));
        assert!(!(y <= x));
        assert!(!(x > y));
        assert!(!(x >= y));
        assert!(x != y);
        assert!(y != x);
        assert_eq!(x.cmp(&y), Ordering::Less);
    }
    assert_eq!(text("apple"), text("apple"));
}

#[test]
fn exactly_one_verdict() {
    let sequences: Vec<Sequence<i64>> = vec![
        Sequence::empty(),
        Sequence::from(vec![0]),
        Sequence::from(vec![0, 0]),
        Sequence::from(vec![0, 1]),
        Sequence::from(vec![1]),
        Sequence::new(0..3),
    ];
    for a in &sequences {
        for b in &sequences {
            let verdicts = [a < b, a == b, a > b];
            assert_eq!(verdicts.iter().filter(|v| **v).count(), 1, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn sorting_by_sequence_key() {
    let sentence = "the duck walked up to the lemonade stand and he stands";
    let mut by_key: Vec<&str> = sentence.split(' ').collect();
    by_key.sort_by_key(|word| text(word));
    let mut plain: Vec<&str> = sentence.split(' ').collect();
    plain.sort();
    assert_eq!(by_key, plain);
}

#[test]
fn coerces_raw_inputs() {
    assert!(text("apple") < "banana");
    assert!(text("apple") == "apple");
    assert!(text("apple") == String::from("apple"));
    assert!(text("apple").equals("apple"));
    assert_eq!(text("apple").compare("apply"), Ordering::Less);
    assert!(Sequence::from(vec![1, 2]) == [1, 2]);
    assert!(Sequence::from(vec![1, 2]) == vec![1, 2]);
    assert!(vec![1, 2] == Sequence::from(vec![1, 2]));
    assert!(Sequence::from(vec![1, 2]) < vec![1, 3]);
    assert!(Sequence::from(vec![1, 2]).equals(1..3));
}

#[test]
fn comparison_stops_at_first_difference() {
    let naturals = Sequence::integers(0);
    let shifted = Sequence::integers(0).substitute(5, -1);
    assert!(naturals > shifted);
    assert_ne!(naturals, shifted);
    assert!(naturals.realized() <= 6);
}

#[test]
fn incomparable_values_are_reported() {
    let apple = Value::from("apple");
    let err = apple.try_cmp(&Value::Int(2)).unwrap_err();
    assert_eq!(err, SeqError::UnsupportedComparison { lhs: "string", rhs: "int" });
    assert!(apple.try_eq(&Value::Int(2)).unwrap_err().is_unsupported_comparison());
    assert_eq!(apple.partial_cmp(&Value::Int(2)), None);
    assert!(apple != Value::Int(2));
}
