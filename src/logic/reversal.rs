//! String reversal through a stack
//!
//! Every character is pushed onto a stack in reading order, then popped back
//! out, which yields the characters last-to-first.

use crate::containers::{Stack, ValueStack};

/// Text shown in place of a reversal result for empty input.
pub const NO_CONTENT: &str = "No string found";

/// Reverse `text` by `char`.
///
/// Returns `None` for empty input so callers can tell "nothing to reverse"
/// apart from a real result.
///
/// ```
/// use stacks_and_queues::logic::reversal::reverse;
///
/// assert_eq!(reverse("abc").as_deref(), Some("cba"));
/// assert_eq!(reverse(""), None);
/// ```
pub fn reverse(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let mut stack: ValueStack<char> = text.chars().collect();
    let mut reversed = String::with_capacity(text.len());
    while let Some(c) = stack.pop() {
        reversed.push(c);
    }
    Some(reversed)
}

/// Reverse `text`, rendering empty input as [`NO_CONTENT`].
pub fn reverse_or_placeholder(text: &str) -> String {
    reverse(text).unwrap_or_else(|| NO_CONTENT.to_string())
}
