use std::collections::VecDeque;

use super::types::SessionState;

/// Bounded stack of state snapshots. When full, the oldest snapshot is
/// dropped to make room.
#[derive(Debug)]
pub(crate) struct UndoLog {
    snapshots: VecDeque<SessionState>,
    limit: usize,
}

impl UndoLog {
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit: limit.max(2),
        }
    }

    pub fn push(&mut self, state: SessionState) {
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(state);
    }

    pub fn pop(&mut self) -> Option<SessionState> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(2);
        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(output: &str) -> SessionState {
        let mut s = SessionState::new("Main");
        s.output = output.to_string();
        s
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut log = UndoLog::new(8);
        log.push(state("a"));
        log.push(state("b"));
        assert_eq!(log.pop().unwrap().output, "b");
        assert_eq!(log.pop().unwrap().output, "a");
        assert!(log.pop().is_none());
    }

    #[test]
    fn drops_oldest_when_full() {
        let mut log = UndoLog::new(3);
        for s in ["a", "b", "c", "d"] {
            log.push(state(s));
        }
        assert_eq!(log.len(), 3);
        let drained: Vec<String> = std::iter::from_fn(|| log.pop()).map(|s| s.output).collect();
        assert_eq!(drained, ["d", "c", "b"]);
    }

    #[test]
    fn limit_has_floor_of_two() {
        let mut log = UndoLog::new(0);
        log.push(state("a"));
        log.push(state("b"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn shrinking_limit_trims_oldest() {
        let mut log = UndoLog::new(4);
        for s in ["a", "b", "c", "d"] {
            log.push(state(s));
        }
        log.set_limit(2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.pop().unwrap().output, "d");
        assert_eq!(log.pop().unwrap().output, "c");
    }
}
