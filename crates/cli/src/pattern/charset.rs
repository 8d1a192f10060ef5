// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ASCII character sets built from bracket expressions.

use std::fmt;

use super::CompileError;

/// A set of ASCII characters, stored as a 128-bit membership mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    bits: u128,
}

impl CharSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Add a single character. Non-ASCII characters are ignored.
    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.bits |= 1u128 << (c as u32);
        }
    }

    /// Add every character in the inclusive range `start..=end`.
    pub fn insert_range(&mut self, start: char, end: char) {
        for c in start..=end {
            self.insert(c);
        }
    }

    /// Check set membership.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.bits & (1u128 << (c as u32)) != 0
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate members in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .map(char::from)
            .filter(move |&c| self.contains(c))
    }

    /// Expand the body of a bracket expression (the text between `[` and `]`).
    ///
    /// `offset` is the byte position of the body within the whole pattern and
    /// is only used for error reporting.
    ///
    /// A character followed by `-` and another non-dash character forms an
    /// inclusive range. Any other character is taken literally, so a lone
    /// dash (`[-]`, `[-a]`) is a literal dash. Dashes that cannot start or
    /// end a range unambiguously are rejected:
    ///
    /// - `[a-]`: range with nothing after the dash
    /// - `[a--]`, `[--a]`: doubled dash
    /// - `[a-c-e]`, `[a-a-]`: dash directly after a completed range
    pub fn parse_group(body: &str, offset: usize) -> Result<Self, CompileError> {
        let chars: Vec<char> = body.chars().collect();
        let mut set = CharSet::new();
        let mut after_range = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let position = offset + i;

            if !c.is_ascii() {
                return Err(CompileError::UnsupportedCharacter {
                    character: c,
                    position,
                });
            }

            if c == '-' && after_range {
                return Err(malformed(body, position));
            }

            if chars.get(i + 1) == Some(&'-') {
                let end = match chars.get(i + 2) {
                    Some(&end) if end != '-' && c != '-' => end,
                    _ => return Err(malformed(body, position + 1)),
                };
                if !end.is_ascii() {
                    return Err(CompileError::UnsupportedCharacter {
                        character: end,
                        position: position + 2,
                    });
                }
                if c > end {
                    return Err(CompileError::InvalidRangeBounds {
                        group: body.to_string(),
                        start: c,
                        end,
                    });
                }
                set.insert_range(c, end);
                after_range = true;
                i += 3;
            } else {
                set.insert(c);
                after_range = false;
                i += 1;
            }
        }

        Ok(set)
    }
}

fn malformed(body: &str, position: usize) -> CompileError {
    CompileError::MalformedRange {
        group: body.to_string(),
        position,
    }
}

/// Renders the set in bracket syntax, collapsing runs of three or more
/// consecutive characters into ranges.
impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let members: Vec<char> = self.iter().collect();
        let mut i = 0;
        while i < members.len() {
            let start = members[i];
            let mut j = i;
            while j + 1 < members.len() && members[j + 1] as u32 == members[j] as u32 + 1 {
                j += 1;
            }
            if j - i >= 2 {
                write!(f, "{}-{}", start, members[j])?;
            } else {
                for c in &members[i..=j] {
                    write!(f, "{}", c)?;
                }
            }
            i = j + 1;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;
