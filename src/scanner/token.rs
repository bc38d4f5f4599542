//! Tokens seen by the scanner's top-level loop
//!
//! The scanner does not tokenize the language. It only needs to tell apart a
//! run of ASCII letters (which may be a trigger keyword) from any single other
//! character (which may open a string, a regex or a comment).

use std::fmt;

/// Smallest unit the top-level loop dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One or more consecutive `a-z` / `A-Z` characters
    Word(String),
    /// Any single non-letter character
    Symbol(char),
}

impl Token {
    /// The trigger keyword this token spells, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Word(word) => Keyword::from_word(word),
            Token::Symbol(_) => None,
        }
    }
}

/// Keywords whose block gets a coverage marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Function,
    If,
    For,
    While,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "function" => Some(Keyword::Function),
            "if" => Some(Keyword::If),
            "for" => Some(Keyword::For),
            "while" => Some(Keyword::While),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::For => "for",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_str())
    }
}

/// Letters are ASCII only; `_`, `$` and digits end a word.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
