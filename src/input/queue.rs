use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::game::Input;

/// FIFO of pending commands shared by the key reader and the tick loop.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    inner: Arc<Mutex<VecDeque<Input>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Input>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a command unless it repeats the one at the front.
    ///
    /// Returns whether it was queued.
    pub fn push(&self, input: Input) -> bool {
        let mut queue = self.lock();
        if queue.front() == Some(&input) {
            return false;
        }
        queue.push_back(input);
        true
    }

    /// Queue a command only when nothing is pending
    pub fn push_if_empty(&self, input: Input) -> bool {
        let mut queue = self.lock();
        if !queue.is_empty() {
            return false;
        }
        queue.push_back(input);
        true
    }

    pub fn pop(&self) -> Option<Input> {
        self.lock().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_fifo_order() {
        let queue = InputQueue::new();
        queue.push(Input::Turn(Direction::Left));
        queue.push(Input::ToggleDebug);
        queue.push(Input::Turn(Direction::Up));

        assert_eq!(queue.pop(), Some(Input::Turn(Direction::Left)));
        assert_eq!(queue.pop(), Some(Input::ToggleDebug));
        assert_eq!(queue.pop(), Some(Input::Turn(Direction::Up)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_repeat_of_front_is_dropped() {
        let queue = InputQueue::new();
        assert!(queue.push(Input::Turn(Direction::Left)));
        assert!(!queue.push(Input::Turn(Direction::Left)));
        assert!(queue.push(Input::Turn(Direction::Up)));
        // only the front is compared
        assert!(queue.push(Input::Turn(Direction::Up)));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_push_if_empty() {
        let queue = InputQueue::new();
        assert!(queue.push_if_empty(Input::Turn(Direction::Down)));
        assert!(!queue.push_if_empty(Input::Turn(Direction::Left)));
        assert_eq!(queue.len(), 1);
        queue.pop();
        assert!(queue.is_empty());
        assert!(queue.push_if_empty(Input::Turn(Direction::Left)));
    }

    #[test]
    fn test_clones_share_state() {
        let queue = InputQueue::new();
        let writer = queue.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..100 {
                writer.push(Input::Turn(Direction::Left));
                writer.push(Input::Turn(Direction::Right));
            }
        });
        handle.join().unwrap();

        // every later Left repeats the front and is dropped
        assert_eq!(queue.len(), 101);
        assert_eq!(queue.pop(), Some(Input::Turn(Direction::Left)));
    }
}
