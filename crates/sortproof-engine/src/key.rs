//! Value normalizer: token text to comparable key.
//!
//! | Token | Key |
//! |-------|-----|
//! | `"-12"`, `"0"`, `"42"` | `Rank(value)` |
//! | `"A"` ..= `"Z"` | `Rank(1)` ..= `Rank(26)` |
//! | anything else | `Unranked` |
//!
//! Letters interleave with numbers: `"C"` and `"3"` compare equal.

use sortproof_types::{Order, Token};

/// Numeric ordering key derived from a [`Token`].
///
/// `Unranked` is the sentinel for unrecognized tokens. The derived `Ord`
/// places it above every `Rank`, and [`precedes`] keeps it last in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Rank(i64),
    Unranked,
}

impl Key {
    /// The sentinel key.
    pub const SENTINEL: Key = Key::Unranked;

    /// Returns `true` for every key except the sentinel.
    #[must_use]
    pub fn is_ranked(self) -> bool {
        matches!(self, Self::Rank(_))
    }
}

/// Maps a token to its comparable key. Pure and total.
#[must_use]
pub fn comparable_key(token: &Token) -> Key {
    let text = token.as_str();

    if let Some(value) = parse_integer(text) {
        return Key::Rank(value);
    }

    match text.as_bytes() {
        [letter @ b'A'..=b'Z'] => Key::Rank(i64::from(letter - b'A' + 1)),
        _ => Key::SENTINEL,
    }
}

/// Base-10 integer with an optional leading minus. `str::parse` alone would
/// also accept a leading `+`.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Returns `true` when `a` belongs strictly before `b` under `order`.
///
/// Equal keys never precede each other, and the sentinel never precedes
/// anything, so an unranked token is only ever chosen when nothing ranked
/// is left to compete with it.
#[must_use]
pub fn precedes(a: Key, b: Key, order: Order) -> bool {
    match (a, b) {
        (Key::Rank(x), Key::Rank(y)) => match order {
            Order::Ascending => x < y,
            Order::Descending => x > y,
        },
        (Key::Rank(_), Key::Unranked) => true,
        (Key::Unranked, _) => false,
    }
}
