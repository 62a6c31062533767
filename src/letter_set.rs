use std::fmt::Display;

/// Set of letters a-z packed in one word. Letters are case-insensitive, a door `A`
/// and its key `a` take the same slot. Other characters are never members: inserting
/// one leaves the set unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn with(&self, letter: char) -> Self {
        Self(self.0 | Self::bit(letter).unwrap_or(0))
    }

    pub fn insert(&mut self, letter: char) {
        self.0 |= Self::bit(letter).unwrap_or(0);
    }

    pub fn contains(&self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in the set, lowercase and in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .map(char::from)
            .filter(|letter| self.contains(*letter))
    }

    fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_alphabetic() {
            Some(1 << (letter.to_ascii_lowercase() as u32 - 'a' as u32))
        } else {
            None
        }
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }

        set
    }
}

impl Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().collect::<String>())
    }
}
