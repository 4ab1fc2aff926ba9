use chrono::{Datelike, NaiveDate};
use vacation_tool::{CommandHistory, DayEdit, Status};

fn edit(day: u32, old: Status, new: Status) -> DayEdit {
    DayEdit {
        date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
        old,
        new,
    }
}

#[test]
fn push_enables_undo_and_clears_redo() {
    let mut history = CommandHistory::new();
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    history.push(edit(1, Status::Unplanned, Status::Planned));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    history.undo().unwrap();
    assert!(history.can_redo());

    // A fresh push after an undo drops the redo stack for good.
    history.push(edit(2, Status::Unplanned, Status::Planned));
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn undo_and_redo_move_commands_between_stacks() {
    let mut history = CommandHistory::new();
    history.push(edit(1, Status::Unplanned, Status::Planned));
    history.push(edit(2, Status::Unplanned, Status::Planned));

    let command = history.undo().unwrap();
    assert_eq!(command.edits().len(), 1);
    assert_eq!(command.edits()[0].date.day(), 2);
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 1);

    let command = history.redo().unwrap();
    assert_eq!(command.edits()[0].date.day(), 2);
    assert_eq!(history.undo_depth(), 2);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn undo_on_empty_history_is_a_noop() {
    let mut history = CommandHistory::new();
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn coalesce_merges_into_the_top_command() {
    let mut history = CommandHistory::new();
    history.push(edit(1, Status::Unplanned, Status::Planned));
    assert!(history.coalesce(edit(2, Status::Unplanned, Status::Planned)));
    assert!(history.coalesce(edit(3, Status::Unplanned, Status::Planned)));

    // The gesture is still a single undo step.
    assert_eq!(history.undo_depth(), 1);
    let command = history.undo().unwrap();
    assert_eq!(command.edits().len(), 3);
}

#[test]
fn coalesce_on_empty_history_records_nothing() {
    let mut history = CommandHistory::new();
    assert!(!history.coalesce(edit(1, Status::Unplanned, Status::Planned)));
    assert!(!history.can_undo());
}

#[test]
fn clear_drops_both_stacks() {
    let mut history = CommandHistory::new();
    history.push(edit(1, Status::Unplanned, Status::Planned));
    history.undo().unwrap();
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
