mod common;

use common::text;
use golfseq::prelude::*;

#[test]
fn characters() {
    assert_eq!(Character::from_codepoint(1), Ok(Character::from('\x01')));
    assert_eq!(Character::from_codepoint(0x10FFFF).unwrap(), '\u{10FFFF}');
    assert_eq!(Character::new("a").unwrap(), 'a');
    assert_eq!(u32::from(Character::from_codepoint(100).unwrap()), 100);
    assert_eq!(char::from(Character::from('z')), 'z');

    assert_eq!(format!("{:?}", Character::from('a')), "'a'");
    assert_eq!(Character::from('a').to_string(), "a");
}

#[test]
fn invalid_characters() {
    for input in ["abc", ""] {
        let err = Character::new(input).unwrap_err();
        assert!(err.is_invalid_character_length(), "{input:?}");
    }
    assert_eq!(
        Character::try_from("ab"),
        Err(SeqError::InvalidCharacterLength { input: "ab".to_owned(), length: 2 })
    );
    for codepoint in [-1, 0x10FFFF + 1, 0xDFFF] {
        assert_eq!(Character::from_codepoint(codepoint), Err(SeqError::InvalidCodepoint(codepoint)));
    }
}

#[test]
fn characters_do_not_compose() {
    let a = Value::from('a');
    let b = Value::from('b');
    assert!(a.try_add(&b).unwrap_err().is_unsupported_operation());
    assert!(a.try_add(&Value::from("b")).unwrap_err().is_unsupported_operation());
    assert!(a.try_mul(&Value::Int(2)).unwrap_err().is_unsupported_operation());
    assert!(Value::Int(2).try_mul(&a).unwrap_err().is_unsupported_operation());
}

#[test]
fn strings() {
    assert_eq!(text("hello"), "hello");
    assert_eq!(GolfString::default(), "");
    assert_eq!(GolfString::from("hi"), GolfString::from(String::from("hi")));
    assert!(text("hello").iter().all(|c| c.as_char().is_ascii_lowercase()));

    assert_eq!(text("hello").to_string(), "hello");
    assert_eq!(format!("{:?}", text("hello")), "\"hello\"");

    assert_eq!(text("Hello").upper(), "HELLO");
    assert_eq!(text("Hello").lower(), "hello");
    assert_eq!(text("straße").upper(), "STRASSE");
}

#[test]
fn lazy_strings() {
    let letters = GolfString::from_chars(('a'..='z').cycle());
    assert_eq!(letters.get(27).unwrap(), 'b');
    assert_eq!(format!("{letters:?}"), "<lazy \"abcdefghijklmnopqrstuvwxyzab\" ..>");
    assert_eq!(letters.upper().slice(..3).unwrap(), "ABC");
    assert!(!letters.is_finished());
}

#[test]
fn string_hash_domain() {
    let string = text("hello");
    let list = Sequence::from_vec("hello".chars().collect::<Vec<char>>());
    assert_ne!(string.hash_value(), list.hash_value());

    let open_string = GolfString::from_chars("hello".chars());
    let open_list = Sequence::new("hello".chars());
    assert_eq!(open_string.hash_value(), Domain::String.seed());
    assert_eq!(open_list.hash_value(), Domain::List.seed());
}

#[test]
fn string_ordering() {
    assert!(text("abc") < text("abd"));
    assert!(text("ab") < "abc");
    assert_eq!(text("b").partial_cmp("a"), Some(std::cmp::Ordering::Greater));
}
