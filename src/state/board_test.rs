use super::*;

fn card_ids(cards: &[TaskCard]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}

// =============================================================
// Seed data
// =============================================================

#[test]
fn seed_has_seven_cards_across_three_columns() {
    let board = BoardState::seed();
    assert_eq!(board.to_do.len(), 3);
    assert_eq!(board.in_progress.len(), 2);
    assert_eq!(board.done.len(), 2);
    assert_eq!(board.total(), 7);
}

// =============================================================
// move_task
// =============================================================

#[test]
fn move_to_same_slot_is_a_noop() {
    let mut board = BoardState::seed();
    let before = board.clone();
    assert!(!board.move_task(Column::ToDo, 1, Column::ToDo, 1));
    assert_eq!(board, before);
}

#[test]
fn reorder_within_a_column() {
    let mut board = BoardState::seed();
    assert!(board.move_task(Column::ToDo, 0, Column::ToDo, 2));
    assert_eq!(card_ids(&board.to_do), vec!["2", "5", "1"]);
    assert_eq!(board.total(), 7);
}

#[test]
fn cross_column_move_preserves_total_count() {
    let mut board = BoardState::seed();
    assert!(board.move_task(Column::ToDo, 0, Column::InProgress, 0));
    assert_eq!(card_ids(&board.to_do), vec!["2", "5"]);
    assert_eq!(card_ids(&board.in_progress), vec!["1", "3", "6"]);
    assert_eq!(board.total(), 7);
}

#[test]
fn out_of_range_source_is_rejected_without_mutation() {
    let mut board = BoardState::seed();
    let before = board.clone();
    assert!(!board.move_task(Column::Done, 5, Column::ToDo, 0));
    assert_eq!(board, before);
}

#[test]
fn destination_past_the_end_appends() {
    let mut board = BoardState::seed();
    assert!(board.move_task(Column::InProgress, 0, Column::Done, 99));
    assert_eq!(card_ids(&board.done), vec!["4", "7", "3"]);
}

// =============================================================
// Column neighbors
// =============================================================

#[test]
fn column_neighbors_cover_the_pipeline() {
    assert_eq!(Column::ToDo.previous(), None);
    assert_eq!(Column::ToDo.next(), Some(Column::InProgress));
    assert_eq!(Column::InProgress.next(), Some(Column::Done));
    assert_eq!(Column::Done.next(), None);
}
