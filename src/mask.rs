//! Character classification and mask construction.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Class assigned to a single character of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// Hashcat mask token for this class.
    pub fn token(self) -> &'static str {
        match self {
            CharClass::Lower => "?l",
            CharClass::Upper => "?u",
            CharClass::Digit => "?d",
            CharClass::Symbol => "?s",
        }
    }

    /// Parse a single `?x` token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "?l" => Some(CharClass::Lower),
            "?u" => Some(CharClass::Upper),
            "?d" => Some(CharClass::Digit),
            "?s" => Some(CharClass::Symbol),
            _ => None,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which character predicates decide the class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassMode {
    /// Unicode case properties and decimal digits (category `Nd`), so `é` is
    /// lower and `٣` a digit while `½` and `〇` are symbols.
    #[default]
    Unicode,
    /// Only ASCII letters and digits; every other char is a symbol.
    Ascii,
}

/// Classify one character.
pub fn classify(c: char, mode: ClassMode) -> CharClass {
    match mode {
        ClassMode::Unicode => {
            if c.is_lowercase() {
                CharClass::Lower
            } else if c.is_uppercase() {
                CharClass::Upper
            } else if get_general_category(c) == GeneralCategory::DecimalNumber {
                CharClass::Digit
            } else {
                CharClass::Symbol
            }
        }
        ClassMode::Ascii => {
            if c.is_ascii_lowercase() {
                CharClass::Lower
            } else if c.is_ascii_uppercase() {
                CharClass::Upper
            } else if c.is_ascii_digit() {
                CharClass::Digit
            } else {
                CharClass::Symbol
            }
        }
    }
}

/// Character-class pattern of a word.
///
/// Two masks are equal when their class sequences are equal, regardless of
/// which words produced them. The `Display` form is hashcat mask syntax,
/// e.g. `?u?l?l?d`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Mask(Vec<CharClass>);

impl Mask {
    /// Derive the mask of `word`, one class per char.
    pub fn of(word: &str, mode: ClassMode) -> Self {
        Mask(word.chars().map(|c| classify(c, mode)).collect())
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.0
    }

    /// Number of tokens, equal to the char count of the source word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the `Display` form back into a mask.
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() % 2 != 0 {
            return None;
        }
        let bytes = text.as_bytes();
        let mut classes = Vec::with_capacity(text.len() / 2);
        for pair in bytes.chunks(2) {
            let token = std::str::from_utf8(pair).ok()?;
            classes.push(CharClass::from_token(token)?);
        }
        Some(Mask(classes))
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|c| c.token()).collect();
        f.pad(&text)
    }
}
