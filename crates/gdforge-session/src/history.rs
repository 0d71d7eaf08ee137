use serde_json::Value;

/// Snapshots retained at most; the oldest are evicted beyond this.
pub const HISTORY_CAP: usize = 50;

/// Bounded undo history: an ordered run of draft snapshots plus the index
/// of the current one. Recording a new snapshot truncates anything ahead of
/// the index (redone entries), appends, and evicts the oldest entries past
/// the cap.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Value>,
    index: usize,
}

impl History {
    /// A 1-entry history holding the freshly opened draft.
    pub fn seeded(initial: Value) -> Self {
        Self { snapshots: vec![initial], index: 0 }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Record the draft state after an edit.
    pub fn record(&mut self, snapshot: Value) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > HISTORY_CAP {
            let excess = self.snapshots.len() - HISTORY_CAP;
            self.snapshots.drain(..excess);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. `None` at the earliest retained entry.
    pub fn undo(&mut self) -> Option<&Value> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn undo_steps_back_one_edit_at_a_time() {
        let mut history = History::seeded(json!({"v": 0}));
        history.record(json!({"v": 1}));
        history.record(json!({"v": 2}));
        assert_eq!(history.undo(), Some(&json!({"v": 1})));
        assert_eq!(history.undo(), Some(&json!({"v": 0})));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn recording_truncates_redone_entries() {
        let mut history = History::seeded(json!(0));
        history.record(json!(1));
        history.record(json!(2));
        history.undo();
        history.undo();
        history.record(json!(9));
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&json!(0)));
    }

    #[test]
    fn sixty_edits_leave_at_most_fifty_snapshots() {
        let mut history = History::seeded(json!(0));
        for i in 1..=60 {
            history.record(json!(i));
        }
        assert_eq!(history.len(), HISTORY_CAP);

        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, HISTORY_CAP - 1);
        // earliest retained snapshot, not the original seed
        assert_eq!(history.index(), 0);
    }
}
