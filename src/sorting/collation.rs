//! Member name collation.
//!
//! Approximates the root-locale collation behind JavaScript's
//! `localeCompare`, which is what TypeScript developers expect member names
//! to be ordered by:
//!
//! 1. Primary: whitespace, then punctuation and symbols in root collation
//!    order (`_` and `-` first, `$` last), then digits, then letters.
//!    Letters compare by base letter, ignoring case and Latin diacritics.
//!    A proper prefix sorts first.
//! 2. Secondary: unaccented letters before accented ones.
//! 3. Tertiary: lowercase before uppercase.
//! 4. Final: code point order, so the comparison is a total order.

use std::cmp::Ordering;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_by(a, b, primary_key)
        .then_with(|| compare_by(a, b, accent_weight))
        .then_with(|| compare_by(a, b, case_rank))
        .then_with(|| a.cmp(b))
}

fn compare_by<K: Ord>(a: &str, b: &str, key: impl Fn(char) -> K) -> Ordering {
    a.chars().map(&key).cmp(b.chars().map(&key))
}

fn primary_key(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if c.is_alphabetic() {
        (3, base_letter(c).unwrap_or_else(|| fold_case(c)) as u32)
    } else if c.is_numeric() {
        (2, c as u32)
    } else {
        let rank = PUNCTUATION_ORDER
            .find(c)
            .map_or(PUNCTUATION_ORDER.len() as u32 + c as u32, |i| i as u32);
        (1, rank)
    }
}

/// Zero for characters without a diacritic.
fn accent_weight(c: char) -> u32 {
    match base_letter(c) {
        Some(_) => fold_case(c) as u32,
        None => 0,
    }
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Lowercase base of a Latin letter carrying a diacritic.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' | 'à'..='å' | '\u{100}'..='\u{105}' => 'a',
        'Ç' | 'ç' | '\u{106}'..='\u{10D}' => 'c',
        '\u{10E}'..='\u{111}' => 'd',
        'È'..='Ë' | 'è'..='ë' | '\u{112}'..='\u{11B}' => 'e',
        '\u{11C}'..='\u{123}' => 'g',
        '\u{124}'..='\u{127}' => 'h',
        'Ì'..='Ï' | 'ì'..='ï' | '\u{128}'..='\u{130}' => 'i',
        '\u{134}'..='\u{135}' => 'j',
        '\u{136}'..='\u{137}' => 'k',
        '\u{139}'..='\u{142}' => 'l',
        'Ñ' | 'ñ' | '\u{143}'..='\u{148}' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | '\u{14C}'..='\u{151}' => 'o',
        '\u{154}'..='\u{159}' => 'r',
        '\u{15A}'..='\u{161}' => 's',
        '\u{162}'..='\u{167}' => 't',
        'Ù'..='Ü' | 'ù'..='ü' | '\u{168}'..='\u{173}' => 'u',
        '\u{174}'..='\u{175}' => 'w',
        'Ý' | 'ý' | 'ÿ' | '\u{176}'..='\u{178}' => 'y',
        '\u{179}'..='\u{17E}' => 'z',
        _ => return None,
    };
    Some(base)
}
