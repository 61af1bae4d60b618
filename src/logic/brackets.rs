//! Bracket-balance checking
//!
//! A sequence is balanced when every closing bracket matches the most recent
//! unmatched opening bracket of the same kind, and nothing is left open at
//! the end.
//!
//! # State Machine
//!
//! One stack of open brackets:
//!
//! | Input            | Action |
//! |------------------|--------|
//! | `(` `[` `{`      | push |
//! | `)` `]` `}`      | pop if the top matches, otherwise reject immediately |
//! | anything else    | ignored |
//!
//! After the last character the sequence is balanced iff the stack is empty.

use tracing::debug;

use crate::containers::{Stack, ValueStack};
use crate::types::Verdict;

/// Bracket kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` `)`
    Round,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
}

impl Bracket {
    pub fn open_char(&self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close_char(&self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// One of the six recognized bracket characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketToken {
    Open(Bracket),
    Close(Bracket),
}

impl BracketToken {
    /// Classify a character; `None` for anything that is not a bracket.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Open(Bracket::Round)),
            '[' => Some(Self::Open(Bracket::Square)),
            '{' => Some(Self::Open(Bracket::Curly)),
            ')' => Some(Self::Close(Bracket::Round)),
            ']' => Some(Self::Close(Bracket::Square)),
            '}' => Some(Self::Close(Bracket::Curly)),
            _ => None,
        }
    }
}

/// Check whether the brackets in `s` are balanced.
///
/// Non-bracket characters are skipped. The first mismatched or unmatched
/// closing bracket rejects the whole input without reading further.
///
/// ```
/// use stacks_and_queues::logic::brackets::is_balanced;
///
/// assert!(is_balanced("{([])}"));
/// assert!(!is_balanced("{([)}"));
/// ```
pub fn is_balanced(s: &str) -> bool {
    let mut open: ValueStack<Bracket> = ValueStack::new();

    for (position, c) in s.chars().enumerate() {
        match BracketToken::from_char(c) {
            Some(BracketToken::Open(kind)) => open.push(kind),
            Some(BracketToken::Close(kind)) => {
                let top = open.peek();
                if top != Some(kind) {
                    let expected = top.map(|b| b.close_char());
                    debug!(
                        "Rejecting {:?} at position {}, expected {:?}",
                        c, position, expected
                    );
                    return false;
                }
                open.pop();
            }
            None => debug!("Ignoring {:?} at position {}", c, position),
        }
    }

    open.is_empty()
}

/// Balance check presented as a YES / NO verdict.
pub fn check_brackets(s: &str) -> Verdict {
    Verdict::from(is_balanced(s))
}
