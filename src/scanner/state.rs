//! Scanner states and their transitions
//!
//! Outside of [`State::Normal`] the scanner works one character at a time, and
//! each character moves the machine through [`State::step`]. `Normal` instead
//! dispatches on whole tokens through [`State::after_token`], because trigger
//! keywords are only recognised as complete letter runs.

use super::token::Token;

/// Where the scanner currently is in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Real code
    Normal,
    /// Inside a string or regex literal closed by `terminator`.
    /// `escaped` is set when the previous character was an unescaped backslash.
    Quoted { terminator: char, escaped: bool },
    /// Just read a `/` in real code
    Slash,
    /// Inside `// ...` up to and including the newline
    LineComment,
    /// Inside `/* ... */`; `after_star` is set when the previous character was `*`
    BlockComment { after_star: bool },
    /// After a trigger keyword, looking for the block's opening brace
    BlockEntry { paren_depth: i32 },
}

/// Outcome of feeding one character to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep scanning in the given state
    Continue(State),
    /// The opening brace of an instrumented block was just read.
    /// Insert a marker and go back to [`State::Normal`].
    Mark,
}

impl State {
    pub const fn quoted(terminator: char) -> Self {
        State::Quoted {
            terminator,
            escaped: false,
        }
    }

    /// State entered after the top-level loop reads `token` in real code.
    pub fn after_token(token: &Token) -> Self {
        match token {
            Token::Symbol(quote @ ('\'' | '"')) => State::quoted(*quote),
            Token::Symbol('/') => State::Slash,
            Token::Word(_) if token.keyword().is_some() => State::BlockEntry { paren_depth: 0 },
            _ => State::Normal,
        }
    }

    /// Feed one consumed character to the state.
    pub fn step(self, ch: char) -> Step {
        match self {
            State::Normal => Step::Continue(State::Normal),

            State::Quoted { terminator, escaped } => {
                if escaped {
                    Step::Continue(State::quoted(terminator))
                } else if ch == terminator {
                    Step::Continue(State::Normal)
                } else {
                    Step::Continue(State::Quoted {
                        terminator,
                        escaped: ch == '\\',
                    })
                }
            }

            // Anything but a comment opener starts a regex literal, and the
            // character is already its first content character.
            State::Slash => match ch {
                '/' => Step::Continue(State::LineComment),
                '*' => Step::Continue(State::BlockComment { after_star: false }),
                _ => State::quoted('/').step(ch),
            },

            State::LineComment => {
                if ch == '\n' {
                    Step::Continue(State::Normal)
                } else {
                    Step::Continue(State::LineComment)
                }
            }

            State::BlockComment { after_star } => {
                if after_star && ch == '/' {
                    Step::Continue(State::Normal)
                } else {
                    Step::Continue(State::BlockComment {
                        after_star: ch == '*',
                    })
                }
            }

            State::BlockEntry { paren_depth } => match ch {
                '(' => Step::Continue(State::BlockEntry {
                    paren_depth: paren_depth.saturating_add(1),
                }),
                ')' => Step::Continue(State::BlockEntry {
                    paren_depth: paren_depth.saturating_sub(1),
                }),
                '{' if paren_depth == 0 => Step::Mark,
                _ => Step::Continue(self),
            },
        }
    }
}
