//! RFC 1459 case mapping.
//!
//! IRC treats `[]\~` as the uppercase forms of `{}|^`, on top of plain ASCII
//! case folding. Nicknames and channel names compare under this mapping.

/// Fold one character under RFC 1459 rules.
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        _ => c.to_ascii_lowercase(),
    }
}

/// Fold a whole string under RFC 1459 rules.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Case-insensitive comparison under RFC 1459 rules.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.chars()
            .map(irc_lower_char)
            .eq(b.chars().map(irc_lower_char))
}
