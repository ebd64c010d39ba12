//! Character set lookup with O(1) membership
//!
//! Used for both sentence enders and list separators. ASCII members hit a
//! flat table, everything else goes through a hash lookup.

use std::collections::HashSet;
use std::fmt;

/// Fast character membership table
#[derive(Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members
    non_ascii: HashSet<char>,
    /// Sorted, deduplicated members for listing and comparison
    members: Vec<char>,
}

impl CharSet {
    /// Build from any sequence of characters; order and duplicates are ignored
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();
        let mut members: Vec<char> = chars.into_iter().collect();
        members.sort_unstable();
        members.dedup();

        for &ch in &members {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
            members,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Members in code point order
    pub fn chars(&self) -> &[char] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl PartialEq for CharSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for CharSet {}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}
