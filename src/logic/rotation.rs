//! Cyclic rotation
//!
//! Rotates a sequence K times, one element per step. Steps are not reduced
//! modulo the length: `k = 7` on five elements really performs seven moves,
//! which lands on the same result as `k = 2`.
//!
//! # Guards
//!
//! | Input            | Result |
//! |------------------|--------|
//! | empty sequence   | empty, for any `k` |
//! | `k <= 0`         | input unchanged |

use crate::containers::Queue;
use crate::types::Direction;

/// Rotate right by `k`: the last `k` elements move to the front.
///
/// Each step takes the tail element and inserts it at the head.
///
/// ```
/// use stacks_and_queues::logic::rotation::rotate_right;
///
/// assert_eq!(rotate_right(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
/// ```
pub fn rotate_right<T: Clone>(sequence: &[T], k: isize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    if k <= 0 {
        return sequence.to_vec();
    }

    let mut result = sequence.to_vec();
    for _ in 0..k {
        if let Some(last) = result.pop() {
            result.insert(0, last);
        }
    }
    result
}

/// Rotate left by `k`: the first `k` elements move to the back.
///
/// Each step dequeues the head and enqueues it again at the tail.
///
/// ```
/// use stacks_and_queues::logic::rotation::rotate_left;
///
/// assert_eq!(rotate_left(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
/// ```
pub fn rotate_left<T: Clone>(sequence: &[T], k: isize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    if k <= 0 {
        return sequence.to_vec();
    }

    let mut queue: Queue<T> = sequence.iter().cloned().collect();
    for _ in 0..k {
        if let Some(head) = queue.dequeue() {
            queue.enqueue(head);
        }
    }
    queue.into_vec()
}

/// Rotate in the given direction.
pub fn rotate<T: Clone>(sequence: &[T], k: isize, direction: Direction) -> Vec<T> {
    match direction {
        Direction::Left => rotate_left(sequence, k),
        Direction::Right => rotate_right(sequence, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn test_rotate_right_examples() {
        assert_eq!(rotate_right(&INPUT, 1), vec![5, 1, 2, 3, 4]);
        assert_eq!(rotate_right(&INPUT, 2), vec![4, 5, 1, 2, 3]);
        assert_eq!(rotate_right(&INPUT, 3), vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_rotate_left_examples() {
        assert_eq!(rotate_left(&INPUT, 1), vec![2, 3, 4, 5, 1]);
        assert_eq!(rotate_left(&INPUT, 2), vec![3, 4, 5, 1, 2]);
        assert_eq!(rotate_left(&INPUT, 3), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_empty_sequence_stays_empty() {
        let empty: [i32; 0] = [];
        assert!(rotate_right(&empty, 3).is_empty());
        assert!(rotate_left(&empty, 3).is_empty());
        assert!(rotate_right(&empty, -1).is_empty());
    }

    #[test]
    fn test_non_positive_k_is_identity() {
        assert_eq!(rotate_right(&INPUT, 0), INPUT.to_vec());
        assert_eq!(rotate_left(&INPUT, 0), INPUT.to_vec());
        assert_eq!(rotate_right(&INPUT, -4), INPUT.to_vec());
        assert_eq!(rotate_left(&INPUT, -4), INPUT.to_vec());
    }

    #[test]
    fn test_k_larger_than_length_wraps() {
        assert_eq!(rotate_right(&INPUT, 7), rotate_right(&INPUT, 2));
        assert_eq!(rotate_left(&INPUT, 5), INPUT.to_vec());
        assert_eq!(rotate_left(&INPUT, 11), rotate_left(&INPUT, 1));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(rotate_right(&["only"], 3), vec!["only"]);
        assert_eq!(rotate_left(&["only"], 3), vec!["only"]);
    }

    #[test]
    fn test_rotate_dispatches_on_direction() {
        assert_eq!(rotate(&INPUT, 1, Direction::Left), vec![2, 3, 4, 5, 1]);
        assert_eq!(rotate(&INPUT, 1, Direction::Right), vec![5, 1, 2, 3, 4]);
    }
}
