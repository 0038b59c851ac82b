mod common;

use common::{probed, text, texts};
use golfseq::prelude::*;

fn list(items: Vec<Value>) -> Value {
    Value::from(items)
}

fn int(i: i64) -> Value {
    Value::Int(i)
}

#[test]
fn unique_keeps_first_occurrences() {
    assert!(Sequence::<i64>::empty().unique().is_empty());
    assert_eq!(text("abc").unique(), "abc");
    assert_eq!(text("abcdabce").unique(), "abcde");
}

#[test]
fn unique_by_equality_scan() {
    let a = Sequence::<Value>::empty();
    let b = Sequence::<Value>::empty();
    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);

    let values = Sequence::from(vec![
        Value::List(a.clone()),
        Value::List(b.clone()),
        Value::List(a.clone()),
    ]);
    let unique = values.unique_by_eq();
    assert_eq!(unique.len(), 1);
    assert!(matches!(unique.get(0), Ok(Value::List(first)) if first.ptr_eq(&a)));

    let values = Sequence::from(vec![Value::List(b.clone()), Value::List(a.clone())]);
    assert!(matches!(values.unique_by_eq().get(0), Ok(Value::List(first)) if first.ptr_eq(&b)));
}

#[test]
fn unique_merges_open_and_finished_sequences() {
    let open = Sequence::new(vec![1i64].into_iter());
    let values = Sequence::from(vec![open.clone(), Sequence::from(vec![1i64])]);
    let unique = values.unique();
    assert_eq!(unique.len(), 1);
    assert!(unique.get(0).unwrap().ptr_eq(&open));

    let source = Sequence::from(vec![1i64, 2]);
    let mixed = source.prefixes(false).extend(source.combinations(1));
    assert_eq!(mixed.unique().len(), 3);
}

#[test]
fn unique_merges_equal_strings_and_lists() {
    let values = Sequence::from(vec![
        Value::from("ab"),
        list(vec![Value::from('a'), Value::from('b')]),
        Value::from("ba"),
    ]);
    let unique = values.unique();
    assert_eq!(unique.len(), 2);
    assert!(unique.get(0).unwrap().is_str());

    let values = Sequence::from(vec![Value::from('a'), Value::from("a"), int(1)]);
    assert_eq!(values.unique().len(), 2);
}

#[test]
fn unique_is_lazy() {
    let (seq, probe) = probed(vec![1, 1, 2, 1, 3], vec![]);
    assert_eq!(seq.unique().take(3), [1, 2, 3]);
    assert!(!probe.fired());
}

#[test]
fn flatten() {
    let nested = Sequence::from(vec![
        int(1),
        list(vec![int(2), list(vec![int(3), list(vec![int(4)])])]),
        list(vec![]),
        int(5),
    ]);
    assert_eq!(nested.flatten(None), [int(1), int(2), int(3), int(4), int(5)]);
    assert_eq!(
        nested.flatten(Some(1)),
        [int(1), int(2), list(vec![int(3), list(vec![int(4)])]), int(5)]
    );
    assert_eq!(nested.flatten(Some(0)), nested.to_vec());
}

#[test]
fn flatten_unnests_strings() {
    let nested = Sequence::from(vec![Value::from("ab"), Value::from('c')]);
    assert_eq!(nested.flatten(None), [Value::from('a'), Value::from('b'), Value::from('c')]);
}

#[test]
fn flatten_over_infinite_inner_sequence() {
    let naturals = Sequence::integers(0).map(Value::Int);
    let nested = Sequence::from(vec![Value::List(naturals)]);
    assert_eq!(nested.flatten(None).get(3), Ok(int(3)));
}

#[test]
fn prefixes() {
    assert_eq!(texts(&text("abc").prefixes(true)), ["", "a", "ab", "abc"]);
    assert_eq!(texts(&text("abc").prefixes(false)), ["a", "ab", "abc"]);
    assert_eq!(texts(&text("").prefixes(true)), [""]);
    assert!(text("").prefixes(false).is_empty());

    let growing = Sequence::integers(1).prefixes(false);
    assert_eq!(growing.get(2).unwrap(), [1, 2, 3]);
}

#[test]
fn strips() {
    assert_eq!(text("  hi  ").lstrip(" "), "hi  ");
    assert_eq!(text("  hi  ").rstrip(" "), "  hi");
    assert_eq!(text("xy hi yx").strip("xy "), "hi");
    assert_eq!(text("   ").strip(" "), "");

    let naturals = Sequence::integers(0).lstrip(vec![0, 1, 2]);
    assert_eq!(naturals.get(0), Ok(3));
}

#[test]
fn split() {
    assert_eq!(texts(&text("the  quick brown ").split(" ")), ["the", "quick", "brown"]);
    assert_eq!(texts(&text("a,b;c").split(",;")), ["a", "b", "c"]);
    assert!(text(",,,").split(",").is_empty());
    assert_eq!(texts(&text("abc").split(",")), ["abc"]);
}

#[test]
fn split_over_infinite_source() {
    let digits = Sequence::integers(1).map(|x| x % 4);
    let runs = digits.split(vec![0]);
    assert_eq!(runs.get(0).unwrap(), [1, 2, 3]);
    assert_eq!(runs.get(5).unwrap(), [1, 2, 3]);
}

#[test]
fn edits() {
    let c = Character::from;
    assert_eq!(text("hello").substitute(0, c('j')), "jello");
    assert_eq!(text("hello").insert(5, c('!')), "hello!");
    assert_eq!(text("ello").prepend(c('h')).append(c('!')), "hello!");
    assert_eq!(text("hel").extend("lo"), "hello");
    assert_eq!(GolfString::chain(["a", "b", "", "c"]), "abc");
    assert_eq!(text("ab").times(3), "ababab");
}

#[test]
fn edits_over_infinite_source() {
    let naturals = Sequence::integers(0);
    assert_eq!(naturals.insert(2, -1).take(4), [0, 1, -1, 2]);
    assert_eq!(naturals.substitute(1, 9).take(3), [0, 9, 2]);
    assert_eq!(naturals.prepend(-1).get(0), Ok(-1));
    assert!(!naturals.is_finished());
}

#[test]
fn repeat() {
    assert_eq!(Sequence::repeat(7, Some(3)), [7, 7, 7]);
    let forever = Sequence::repeat(7, None);
    assert_eq!(forever.get(1_000), Ok(7));
}
