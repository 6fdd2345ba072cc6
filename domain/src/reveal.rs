//! Reveal ordering
//!
//! [`RevealCursor`] walks an answer's characters once, in order. The timing
//! half of the reveal lives in the application layer; this type owns the
//! ordering guarantee: appending every character the cursor yields produces
//! every prefix of the answer exactly once, with nothing skipped or
//! repeated.

use crate::core::answer::Answer;

/// Ordered character cursor over an answer's markup
#[derive(Debug, Clone)]
pub struct RevealCursor<'a> {
    chars: std::str::Chars<'a>,
    emitted: usize,
    total: usize,
}

impl<'a> RevealCursor<'a> {
    /// Create a cursor positioned before the first character
    pub fn new(answer: &'a Answer) -> Self {
        Self {
            chars: answer.markup().chars(),
            emitted: 0,
            total: answer.char_count(),
        }
    }

    /// The next character to append, or `None` once the answer is fully
    /// revealed
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.emitted += 1;
        Some(c)
    }

    /// Characters yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Characters still to come
    pub fn remaining(&self) -> usize {
        self.total - self.emitted
    }

    /// Whether the whole answer has been yielded
    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for RevealCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.next_char()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining();
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_in_order() {
        let answer = Answer::new("<b>hi</b>");
        let cursor = RevealCursor::new(&answer);
        let walked: String = cursor.collect();
        assert_eq!(walked, "<b>hi</b>");
    }

    #[test]
    fn test_every_step_is_a_prefix() {
        let answer = Answer::new("abcé漢");
        let mut cursor = RevealCursor::new(&answer);
        let mut shown = String::new();
        while let Some(c) = cursor.next_char() {
            shown.push(c);
            assert!(answer.markup().starts_with(&shown));
            assert_eq!(cursor.emitted(), shown.chars().count());
        }
        assert_eq!(shown, answer.markup());
        assert!(cursor.is_done());
    }

    #[test]
    fn test_empty_answer_is_done_immediately() {
        let answer = Answer::default();
        let mut cursor = RevealCursor::new(&answer);
        assert!(cursor.is_done());
        assert_eq!(cursor.next_char(), None);
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let answer = Answer::new("x");
        let mut cursor = RevealCursor::new(&answer);
        assert_eq!(cursor.next_char(), Some('x'));
        assert_eq!(cursor.next_char(), None);
        assert_eq!(cursor.next_char(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let answer = Answer::new("abc");
        let mut cursor = RevealCursor::new(&answer);
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next_char();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
    }
}
