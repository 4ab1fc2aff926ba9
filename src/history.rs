use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// One recorded status transition on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEdit {
    pub date: NaiveDate,
    pub old: Status,
    pub new: Status,
}

/// One undo step. A single click produces a command with one edit; a drag
/// gesture coalesces into a command with several edits in application order.
/// Undo replays `old` in reverse order, redo replays `new` in forward order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    edits: Vec<DayEdit>,
}

impl Command {
    fn new(edit: DayEdit) -> Self {
        Self { edits: vec![edit] }
    }

    pub fn edits(&self) -> &[DayEdit] {
        &self.edits
    }
}

/// Linear undo/redo history. Commands live only here and are never
/// persisted.
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh edit as its own undo step. Any redoable commands are
    /// dropped for good (no redo branching).
    pub fn push(&mut self, edit: DayEdit) {
        self.redo_stack.clear();
        self.undo_stack.push(Command::new(edit));
    }

    /// Merge an edit into the most recent command so a whole drag gesture
    /// undoes as one step. Returns false (and records nothing) when the
    /// undo stack is empty. Never grows the stack.
    pub fn coalesce(&mut self, edit: DayEdit) -> bool {
        match self.undo_stack.last_mut() {
            Some(command) => {
                command.edits.push(edit);
                true
            }
            None => false,
        }
    }

    /// Pop the most recent command onto the redo stack and hand it to the
    /// caller for replay. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Command> {
        let command = self.undo_stack.pop()?;
        self.redo_stack.push(command.clone());
        Some(command)
    }

    /// Symmetric to [`CommandHistory::undo`].
    pub fn redo(&mut self) -> Option<Command> {
        let command = self.redo_stack.pop()?;
        self.undo_stack.push(command.clone());
        Some(command)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
