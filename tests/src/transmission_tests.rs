//! Full pulse-train scenarios through the public API

use morse_core::{pattern, resolve_index_in, Layout, MorseError};
use rstest::rstest;

use crate::transmitter;

#[rstest]
#[case::single_dot('e', &[250, 250, 750])]
#[case::single_dash('t', &[750, 250, 750])]
#[case::three_dots('s', &[250, 250, 250, 250, 250, 250, 750])]
#[case::three_dashes('o', &[750, 250, 750, 250, 750, 250, 750])]
#[case::at_sign('@', &[250, 250, 750, 250, 750, 250, 250, 250, 750, 250, 250, 250, 750])]
fn character_pulse_trains(#[case] ch: char, #[case] expected: &[u32]) {
    let mut tx = transmitter();
    tx.send_char(ch).unwrap();

    let (_, delay) = tx.free();
    assert_eq!(delay.holds_ms(), expected);
}

#[rstest]
#[case::uppercase('E')]
#[case::space(' ')]
#[case::unmapped_latin('z')]
#[case::cyrillic_without_fallback('с')]
fn unmapped_characters_key_nothing(#[case] ch: char) {
    let mut tx = transmitter();
    assert_eq!(tx.send_char(ch), Err(MorseError::SymbolNotFound));

    let (pin, delay) = tx.free();
    assert_eq!(pin.levels().len(), 1); // constructor idle write only
    assert!(delay.holds_ms().is_empty());
}

#[test]
fn sos_word_pulse_train() {
    let mut tx = transmitter();
    tx.send_word("sos").unwrap();

    let (pin, delay) = tx.free();
    let holds = delay.holds_ms();

    // three characters of 7 holds each, then one word gap
    assert_eq!(holds.len(), 3 * 7 + 1);
    assert_eq!(*holds.last().unwrap(), 1750);
    // 6 level writes per character plus the constructor's idle write
    assert_eq!(pin.levels().len(), 1 + 3 * 6);
    assert_eq!(pin.last_level(), Some(false)); // back at idle
}

#[test]
fn word_failure_skips_rest_but_keeps_word_gap() {
    let mut tx = transmitter();
    assert_eq!(tx.send_word("e e"), Err(MorseError::SymbolNotFound));

    let (_, delay) = tx.free();
    // first 'e', then the space fails, second 'e' never sent
    assert_eq!(delay.holds_ms(), &[250, 250, 750, 1750]);
}

#[test]
fn lookup_contract() {
    assert_eq!(resolve_index_in('a', Layout::Latin), Some(0));
    assert_eq!(resolve_index_in('1', Layout::Latin), Some(31));
    assert_eq!(resolve_index_in('z', Layout::Latin), None);
    assert_eq!(pattern(0), Ok("*-"));
    assert_eq!(pattern(56), Ok(""));
    assert_eq!(pattern(57), Err(MorseError::IndexOutOfRange));
}

#[test]
fn velocity_applies_to_later_sends_only() {
    let mut tx = transmitter();
    tx.send_char('t').unwrap();
    tx.set_velocity(300).unwrap();
    tx.send_char('t').unwrap();

    let (_, delay) = tx.free();
    assert_eq!(delay.holds_ms(), &[750, 250, 750, 30, 10, 30]);
}
