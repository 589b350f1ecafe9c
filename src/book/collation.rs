//! Locale-style string ordering for sorted views.
//!
//! Plain `str` ordering sorts by code point, which puts every uppercase
//! letter before every lowercase one ("Zoe" < "adam") and every accented
//! letter after `z`. Sorted listings instead follow the root collation
//! order used by ICU and CLDR, in three levels:
//!
//! 1. Primary: base characters, ignoring accents and case. Whitespace and
//!    punctuation sort first (in CLDR root order), then digits, then
//!    letters, then anything else.
//! 2. Secondary: accents. An unaccented letter sorts before the same
//!    letter with a diacritic ("Etawah" < "Étawah").
//! 3. Tertiary: case, lowercase first.
//!
//! Strings that tie on all three levels fall back to code point order so
//! the result is a total order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// CLDR root order of ASCII whitespace, punctuation and symbols.
const VARIABLE_ORDER: &str =
    "\t\n\u{b}\u{c}\r _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Compare two strings the way a dictionary would.
///
/// # Example
///
/// ```
/// use address_book::book::collation::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("a", "A"), Ordering::Less);
/// assert_eq!(locale_compare("Étawah", "Faridabad"), Ordering::Less);
/// ```
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let a_keys = collation_keys(a);
    let b_keys = collation_keys(b);

    let primary = a_keys
        .iter()
        .map(|k| k.primary)
        .cmp(b_keys.iter().map(|k| k.primary));
    let secondary = || {
        a_keys
            .iter()
            .map(|k| &k.accents)
            .cmp(b_keys.iter().map(|k| &k.accents))
    };
    let tertiary = || {
        a_keys
            .iter()
            .map(|k| k.case)
            .cmp(b_keys.iter().map(|k| k.case))
    };

    primary
        .then_with(secondary)
        .then_with(tertiary)
        .then_with(|| a.cmp(b))
}

/// Sort weights for one base character and the marks attached to it.
#[derive(Debug)]
struct CollationKey {
    primary: (u8, u32),
    accents: Vec<char>,
    case: u8,
}

fn collation_keys(s: &str) -> Vec<CollationKey> {
    let mut keys: Vec<CollationKey> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            // A leading mark has no base to attach to and only matters
            // in the final code point tiebreak.
            if let Some(key) = keys.last_mut() {
                key.accents.push(c);
            }
            continue;
        }
        keys.push(CollationKey {
            primary: primary_weight(c),
            accents: Vec::new(),
            case: case_weight(c),
        });
    }
    keys
}

fn primary_weight(c: char) -> (u8, u32) {
    if let Some(pos) = VARIABLE_ORDER.chars().position(|v| v == c) {
        (0, pos as u32)
    } else if c.is_whitespace() || c.is_ascii_punctuation() {
        (0, VARIABLE_ORDER.len() as u32 + c as u32)
    } else if let Some(digit) = c.to_digit(10) {
        (1, digit)
    } else if c.is_alphabetic() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        (2, lower as u32)
    } else {
        (3, c as u32)
    }
}

fn case_weight(c: char) -> u8 {
    if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        2
    } else {
        1
    }
}
