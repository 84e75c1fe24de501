//! Static symbol table: Morse patterns and character layouts.
//!
//! The tables are process-lifetime constants built into the binary; the
//! nth pattern corresponds to the nth slot of either layout. Pattern
//! glyphs are `'*'` for dot and `'-'` for dash. The data is historical
//! and preserved verbatim, quirks included: the full-stop entry is
//! written with `'.'` glyphs the decoder does not accept, the apostrophe
//! occupies two slots, and the error marker is eight dots.

use crate::types::{Layout, MorseError};

/// Number of symbol slots, terminator included
pub const SYMBOL_COUNT: usize = 57;

/// Slot of the `" *DELIMITER* "` marker
pub const DELIMITER_INDEX: usize = 52;
/// Slot of the `" *ERR* "` marker
pub const ERROR_MARK_INDEX: usize = 53;
/// Slot of the `"@"` sign
pub const AT_SIGN_INDEX: usize = 54;
/// Slot of the `" *END* "` marker
pub const END_MARK_INDEX: usize = 55;

/// Morse pattern table, ordered: 31 letters, digits 1-9 then 0,
/// 11 punctuation marks, 4 marker slots, empty terminator.
static CODE: [&str; SYMBOL_COUNT] = [
    "*-", "-***", "*--", "--*", "-**", "*", "***-", "--**", "**", "*---",
    "-*-", "*-**", "--", "-*", "---", "*--*", "*-*", "***", "-", "**-",
    "**-*", "****", "-*-*", "---*", "----", "--*-", "-*--", "-**-", "**-**", "**--",
    "*-*-",
    "*----", "**---", "***--", "****-", "*****", "-****", "--***", "---**", "----*", "-----",
    "......", "*-*-*-", "---***", "-*-*-", "-*--*-", "*----*", "*-**-*", "-****-", "-**-*", "**--**", "--**--",
    "-***-", "********", "*--*-*", "**-*-",
    "",
];

/// Cyrillic layout. Lowercase only; lookup does no normalization.
static LAYOUT_CYRILLIC: [&str; SYMBOL_COUNT] = [
    "а", "б", "в", "г", "д", "е", "ж", "з", "и", "й",
    "к", "л", "м", "н", "о", "п", "р", "с", "т", "у",
    "ф", "х", "ц", "ч", "ш", "щ", "ы", "ь", "э", "ю",
    "я",
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
    ".", ",", ":", ";", "(", "'", "'", "-", "/", "?", "!",
    " *DELIMITER* ", " *ERR* ", "@", " *END* ",
    "",
];

/// Latin layout, slot-for-slot with the Cyrillic one. Slots whose
/// transliteration has no single-character form (the digraph and the
/// markers) can never match a character lookup; slot 7 is deliberately
/// unmapped.
static LAYOUT_LATIN: [&str; SYMBOL_COUNT] = [
    "a", "b", "w", "g", "d", "e", "v", "", "i", "j",
    "k", "l", "m", "n", "o", "p", "r", "s", "t", "u",
    "f", "h", "c", "ö", "ch", "q", "y", "x", "é", "ü",
    "ä",
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
    ".", ",", ":", ";", "(", "'", "'", "-", "/", "?", "!",
    " *DELIMITER* ", " *ERR* ", "@", " *END* ",
    "",
];

fn entries(layout: Layout) -> &'static [&'static str; SYMBOL_COUNT] {
    match layout {
        Layout::Latin => &LAYOUT_LATIN,
        Layout::Cyrillic => &LAYOUT_CYRILLIC,
    }
}

/// A slot matches only when it holds exactly the looked-up character.
fn slot_matches(entry: &str, ch: char) -> bool {
    let mut chars = entry.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

/// Resolve a character within one layout.
///
/// Linear scan in slot order; the first matching slot wins (the
/// apostrophe has a duplicate slot, so order matters). Case-sensitive,
/// no whitespace handling, no normalization.
pub fn resolve_index_in(ch: char, layout: Layout) -> Option<usize> {
    entries(layout).iter().position(|entry| slot_matches(entry, ch))
}

/// Resolve a character, Latin layout first.
///
/// The Cyrillic layout is consulted only on a Latin miss and only when
/// `cyrillic_fallback` is set. Latin-first ordering is part of the
/// contract.
pub fn resolve_index(ch: char, cyrillic_fallback: bool) -> Option<usize> {
    resolve_index_in(ch, Layout::Latin).or_else(|| {
        if cyrillic_fallback {
            resolve_index_in(ch, Layout::Cyrillic)
        } else {
            None
        }
    })
}

/// Pattern for a resolved slot index.
pub fn pattern(index: usize) -> Result<&'static str, MorseError> {
    CODE.get(index).copied().ok_or(MorseError::IndexOutOfRange)
}
