use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: i64,
    name: &'static str,
}

impl Resource for Row {
    fn key(&self) -> i64 {
        self.id
    }
}

fn row(id: i64, name: &'static str) -> Row {
    Row { id, name }
}

fn keys(state: &ResourceState<Row>) -> Vec<i64> {
    state.items().iter().map(|r| r.id).collect()
}

fn loaded(rows: Vec<Row>) -> ResourceState<Row> {
    let mut state = ResourceState::default();
    let ticket = state.begin_refresh();
    assert!(state.apply_refresh(ticket, rows));
    state
}

fn oops() -> ViewError {
    ViewError::recoverable("oops")
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_replaces_items_in_server_order() {
    let mut state = ResourceState::default();
    let ticket = state.begin_refresh();
    assert!(state.loading);
    assert!(state.apply_refresh(ticket, vec![row(3, "c"), row(1, "a"), row(2, "b")]));
    assert!(!state.loading);
    assert_eq!(keys(&state), vec![3, 1, 2]);
}

#[test]
fn refresh_drops_duplicate_keys_in_snapshot() {
    let state = loaded(vec![row(1, "a"), row(1, "again"), row(2, "b")]);
    assert_eq!(keys(&state), vec![1, 2]);
    assert_eq!(state.get(1).unwrap().name, "a");
}

#[test]
fn older_refresh_landing_after_newer_is_discarded() {
    let mut state = ResourceState::default();
    let first = state.begin_refresh();
    let second = state.begin_refresh();
    assert!(state.apply_refresh(second, vec![row(1, "fresh")]));
    assert!(!state.apply_refresh(first, vec![row(1, "stale"), row(9, "gone")]));
    assert_eq!(state.items(), &[row(1, "fresh")]);
    assert!(!state.loading);
}

#[test]
fn loading_stays_set_until_latest_refresh_resolves() {
    let mut state: ResourceState<Row> = ResourceState::default();
    let first = state.begin_refresh();
    let second = state.begin_refresh();
    state.apply_refresh(first, vec![row(1, "a")]);
    assert!(state.loading);
    state.fail_refresh(second, oops());
    assert!(!state.loading);
    assert_eq!(state.error, Some(oops()));
}

#[test]
fn successful_refresh_clears_previous_error() {
    let mut state: ResourceState<Row> = ResourceState::default();
    let failed = state.begin_refresh();
    state.fail_refresh(failed, oops());
    let ticket = state.begin_refresh();
    state.apply_refresh(ticket, vec![]);
    assert_eq!(state.error, None);
}

// =============================================================
// create
// =============================================================

#[test]
fn create_appends_server_record() {
    let mut state = loaded(vec![row(1, "a")]);
    assert!(state.apply_created(row(5, "A")));
    assert_eq!(keys(&state), vec![1, 5]);
}

#[test]
fn create_then_list_holds_exactly_one_record() {
    let mut state = loaded(vec![row(1, "a")]);
    state.apply_created(row(5, "A"));
    let ticket = state.begin_refresh();
    state.apply_refresh(ticket, vec![row(1, "a"), row(5, "A")]);
    assert_eq!(state.items().iter().filter(|r| r.name == "A").count(), 1);
    assert_eq!(state.get(5), Some(&row(5, "A")));
}

#[test]
fn duplicate_create_response_replaces_instead_of_duplicating() {
    let mut state = loaded(vec![]);
    state.apply_created(row(5, "A"));
    state.apply_created(row(5, "A2"));
    assert_eq!(state.items(), &[row(5, "A2")]);
}

#[test]
fn stale_snapshot_keeps_record_created_after_it_was_issued() {
    let mut state = loaded(vec![row(1, "a")]);
    let ticket = state.begin_refresh();
    state.apply_created(row(5, "A"));
    state.apply_refresh(ticket, vec![row(1, "a")]);
    assert_eq!(keys(&state), vec![1, 5]);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_replaces_only_the_target() {
    let mut state = loaded(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    assert!(state.apply_updated(row(2, "B")));
    assert_eq!(state.items(), &[row(1, "a"), row(2, "B"), row(3, "c")]);
}

#[test]
fn update_for_unknown_key_is_ignored() {
    let mut state = loaded(vec![row(1, "a")]);
    assert!(!state.apply_updated(row(8, "x")));
    assert_eq!(state.items(), &[row(1, "a")]);
}

#[test]
fn stale_snapshot_does_not_revert_newer_local_update() {
    let mut state = loaded(vec![row(1, "a"), row(2, "b")]);
    let ticket = state.begin_refresh();
    state.apply_updated(row(2, "B"));
    state.apply_refresh(ticket, vec![row(1, "a"), row(2, "b")]);
    assert_eq!(state.get(2), Some(&row(2, "B")));
}

#[test]
fn snapshot_issued_after_update_wins() {
    let mut state = loaded(vec![row(1, "a")]);
    state.apply_updated(row(1, "local"));
    let ticket = state.begin_refresh();
    state.apply_refresh(ticket, vec![row(1, "server")]);
    assert_eq!(state.get(1), Some(&row(1, "server")));
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_exactly_the_matching_key() {
    let mut state = loaded(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    assert!(state.begin_delete(2));
    state.confirm_delete(2);
    assert_eq!(state.items(), &[row(1, "a"), row(3, "c")]);
}

#[test]
fn delete_of_unknown_key_changes_nothing() {
    let mut state = loaded(vec![row(1, "a")]);
    assert!(!state.begin_delete(9));
    assert_eq!(state.items(), &[row(1, "a")]);
}

#[test]
fn failed_delete_restores_record_in_place() {
    let mut state = loaded(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    state.begin_delete(2);
    state.rollback_delete(2, oops());
    assert_eq!(state.items(), &[row(1, "a"), row(2, "b"), row(3, "c")]);
    assert_eq!(state.error, Some(oops()));
}

#[test]
fn restored_record_accepts_later_updates() {
    let mut state = loaded(vec![row(1, "a")]);
    state.begin_delete(1);
    state.rollback_delete(1, oops());
    assert!(state.apply_updated(row(1, "A")));
    assert_eq!(state.get(1), Some(&row(1, "A")));
}

// =============================================================
// create/delete race
// =============================================================

#[test]
fn create_then_delete_in_order_leaves_no_record() {
    let mut state = loaded(vec![row(1, "a")]);
    state.apply_created(row(7, "new"));
    state.begin_delete(7);
    state.confirm_delete(7);
    assert_eq!(keys(&state), vec![1]);
}

#[test]
fn create_response_landing_after_delete_is_dropped() {
    let mut state = loaded(vec![row(1, "a")]);
    state.begin_delete(7);
    assert!(!state.apply_created(row(7, "new")));
    state.confirm_delete(7);
    assert_eq!(keys(&state), vec![1]);
}

#[test]
fn duplicate_create_after_delete_does_not_resurrect() {
    let mut state = loaded(vec![]);
    state.apply_created(row(7, "new"));
    state.begin_delete(7);
    state.confirm_delete(7);
    assert!(!state.apply_created(row(7, "new")));
    assert!(!state.apply_updated(row(7, "edited")));
    assert!(state.items().is_empty());
}

#[test]
fn stale_snapshot_cannot_resurrect_deleted_record() {
    let mut state = loaded(vec![row(1, "a")]);
    let ticket = state.begin_refresh();
    state.apply_created(row(7, "new"));
    state.begin_delete(7);
    state.confirm_delete(7);
    state.apply_refresh(ticket, vec![row(1, "a"), row(7, "new")]);
    assert_eq!(keys(&state), vec![1]);
}

#[test]
fn later_snapshot_also_excludes_deleted_key() {
    let mut state = loaded(vec![row(1, "a"), row(2, "b")]);
    state.begin_delete(2);
    state.confirm_delete(2);
    let ticket = state.begin_refresh();
    state.apply_refresh(ticket, vec![row(1, "a"), row(2, "b")]);
    assert_eq!(keys(&state), vec![1]);
}
