//! Registry view state
//!
//! The ordered rows currently shown in the table, plus the bookkeeping that
//! keeps a slow list fetch from overwriting newer local changes.
//!
//! Every fetch takes a [`FetchTicket`]. Only the response to the newest
//! ticket is applied; older ones are dropped. Rows appended while the newest
//! fetch was in flight are replayed on top of its response. Rows deleted
//! locally stay hidden from every response to a fetch issued before the
//! service confirmed the removal.

use chrono::{DateTime, Local};
use shepherd_core::{Port, RegistryEntry};

/// Sequence number of one list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// A locally deleted row the service may still list
#[derive(Debug, Clone, Copy)]
struct PendingRemoval {
    port: Port,
    /// Newest ticket issued before the service confirmed; `None` until then
    confirmed_at: Option<u64>,
}

impl PendingRemoval {
    fn hides(&self, ticket: FetchTicket) -> bool {
        self.confirmed_at.map_or(true, |seq| ticket.0 <= seq)
    }
}

#[derive(Debug, Default)]
pub struct RegistryView {
    rows: Vec<RegistryEntry>,
    selected: usize,
    last_sync: Option<DateTime<Local>>,

    /// Highest ticket handed out
    latest_seq: u64,
    /// Ticket still awaiting its response
    pending: Option<FetchTicket>,
    /// Rows appended since `pending` was issued
    appended: Vec<RegistryEntry>,
    removals: Vec<PendingRemoval>,
}

impl RegistryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RegistryEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_sync(&self) -> Option<DateTime<Local>> {
        self.last_sync
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Fetch sequencing
    // ─────────────────────────────────────────────────────────

    /// Issue a ticket for a new list fetch, superseding any in flight
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        let ticket = FetchTicket(self.latest_seq);
        self.pending = Some(ticket);
        self.appended.clear();
        ticket
    }

    /// Apply a list response.
    ///
    /// Returns false (and changes nothing) when `ticket` has been superseded.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, entries: Vec<RegistryEntry>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;

        let mut rows: Vec<RegistryEntry> = entries
            .into_iter()
            .filter(|row| !self.removals.iter().any(|r| r.port == row.port && r.hides(ticket)))
            .collect();
        for entry in std::mem::take(&mut self.appended) {
            if !rows.iter().any(|r| r.port == entry.port) {
                rows.push(entry);
            }
        }
        // Later responses come from fetches issued after these confirmations
        self.removals
            .retain(|r| r.confirmed_at.map_or(true, |seq| seq > ticket.0));
        self.render_all(rows);
        true
    }

    /// Settle a failed fetch; returns true if it was the current one
    pub fn fail_fetch(&mut self, ticket: FetchTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.appended.clear();
        true
    }

    // ─────────────────────────────────────────────────────────
    // Row operations
    // ─────────────────────────────────────────────────────────

    /// Replace every row with `entries`, in order
    pub fn render_all(&mut self, entries: Vec<RegistryEntry>) {
        self.rows = entries;
        self.last_sync = Some(Local::now());
        self.clamp_selection();
    }

    /// Add one row at the end without disturbing the others
    pub fn append_row(&mut self, entry: RegistryEntry) {
        // The service handed this port out again
        self.removals.retain(|r| r.port != entry.port);
        if self.pending.is_some() {
            self.appended.push(entry.clone());
        }
        self.rows.push(entry);
    }

    /// Remove the first row carrying `port`
    pub fn remove_row(&mut self, port: Port) -> Option<RegistryEntry> {
        let idx = self.rows.iter().position(|r| r.port == port)?;
        Some(self.remove_at(idx))
    }

    /// Remove the row under the cursor
    pub fn remove_selected(&mut self) -> Option<RegistryEntry> {
        (self.selected < self.rows.len()).then(|| self.remove_at(self.selected))
    }

    /// The service has dropped `port`; fetches issued from now on reflect it
    pub fn confirm_removal(&mut self, port: Port) {
        let latest = self.latest_seq;
        if let Some(removal) = self
            .removals
            .iter_mut()
            .find(|r| r.port == port && r.confirmed_at.is_none())
        {
            removal.confirmed_at = Some(latest);
        }
    }

    /// The removal request failed; stop hiding `port` from fetches
    pub fn forget_removal(&mut self, port: Port) {
        if let Some(idx) = self
            .removals
            .iter()
            .position(|r| r.port == port && r.confirmed_at.is_none())
        {
            self.removals.remove(idx);
        }
    }

    fn remove_at(&mut self, idx: usize) -> RegistryEntry {
        let removed = self.rows.remove(idx);
        self.removals.push(PendingRemoval {
            port: removed.port,
            confirmed_at: None,
        });
        self.clamp_selection();
        removed
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.selected)
    }

    pub fn selected_entry(&self) -> Option<&RegistryEntry> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.rows.len() - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, port: u16) -> RegistryEntry {
        RegistryEntry::new(name, format!("/{name}"), None, Port::new(port).unwrap())
    }

    fn ports(view: &RegistryView) -> Vec<u16> {
        view.rows().iter().map(|r| r.port.get()).collect()
    }

    #[test]
    fn test_render_all_replaces_rows() {
        let mut view = RegistryView::new();
        view.append_row(entry("old", 9000));
        view.render_all(vec![entry("a", 8001), entry("b", 8002)]);
        assert_eq!(ports(&view), vec![8001, 8002]);
        assert!(view.last_sync().is_some());
    }

    #[test]
    fn test_append_keeps_existing_rows() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001)]);
        view.append_row(entry("b", 8080));
        assert_eq!(ports(&view), vec![8001, 8080]);
    }

    #[test]
    fn test_remove_row_removes_only_matching_port() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001), entry("b", 8080), entry("c", 8002)]);
        let removed = view.remove_row(Port::new(8080).unwrap()).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(ports(&view), vec![8001, 8002]);
        assert!(view.remove_row(Port::new(8080).unwrap()).is_none());
    }

    #[test]
    fn test_remove_row_removes_first_duplicate_only() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001), entry("b", 8001)]);
        view.remove_row(Port::new(8001).unwrap());
        assert_eq!(view.rows()[0].name, "b");
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let mut view = RegistryView::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        assert!(!view.apply_fetch(first, vec![entry("stale", 8001)]));
        assert!(view.is_empty());

        assert!(view.apply_fetch(second, vec![entry("fresh", 8002)]));
        assert_eq!(ports(&view), vec![8002]);

        // A late response for an already settled ticket is ignored as well
        assert!(!view.apply_fetch(second, vec![]));
        assert_eq!(ports(&view), vec![8002]);
    }

    #[test]
    fn test_delete_during_fetch_does_not_reappear() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001), entry("b", 8080)]);
        let ticket = view.begin_fetch();

        view.remove_row(Port::new(8080).unwrap());

        assert!(view.apply_fetch(ticket, vec![entry("a", 8001), entry("b", 8080)]));
        assert_eq!(ports(&view), vec![8001]);
    }

    #[test]
    fn test_delete_then_refresh_hides_unconfirmed_removal() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001), entry("b", 8002)]);

        view.remove_row(Port::new(8001).unwrap());
        let ticket = view.begin_fetch();

        // The service answered the list before it processed the removal
        assert!(view.apply_fetch(ticket, vec![entry("a", 8001), entry("b", 8002)]));
        assert_eq!(ports(&view), vec![8002]);
    }

    #[test]
    fn test_fetch_issued_before_confirmation_still_hides_row() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001)]);
        view.remove_row(Port::new(8001).unwrap());
        let ticket = view.begin_fetch();

        view.confirm_removal(Port::new(8001).unwrap());

        assert!(view.apply_fetch(ticket, vec![entry("a", 8001)]));
        assert!(view.is_empty());
    }

    #[test]
    fn test_fetch_issued_after_confirmation_is_trusted() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001)]);
        view.remove_row(Port::new(8001).unwrap());
        view.confirm_removal(Port::new(8001).unwrap());

        let ticket = view.begin_fetch();
        assert!(view.apply_fetch(ticket, vec![entry("again", 8001)]));
        assert_eq!(ports(&view), vec![8001]);
    }

    #[test]
    fn test_failed_removal_lets_row_return() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001)]);
        view.remove_row(Port::new(8001).unwrap());
        view.forget_removal(Port::new(8001).unwrap());

        let ticket = view.begin_fetch();
        assert!(view.apply_fetch(ticket, vec![entry("a", 8001)]));
        assert_eq!(ports(&view), vec![8001]);
    }

    #[test]
    fn test_remove_selected_takes_row_under_cursor() {
        let mut view = RegistryView::new();
        view.render_all(vec![entry("a", 8001), entry("b", 8001)]);
        view.select_last();

        let removed = view.remove_selected().unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(view.rows()[0].name, "a");
        assert!(RegistryView::new().remove_selected().is_none());
    }

    #[test]
    fn test_append_during_fetch_is_kept() {
        let mut view = RegistryView::new();
        let ticket = view.begin_fetch();

        view.append_row(entry("new", 8090));

        assert!(view.apply_fetch(ticket, vec![entry("a", 8001)]));
        assert_eq!(ports(&view), vec![8001, 8090]);
    }

    #[test]
    fn test_append_already_in_response_is_not_duplicated() {
        let mut view = RegistryView::new();
        let ticket = view.begin_fetch();
        view.append_row(entry("new", 8090));

        view.apply_fetch(ticket, vec![entry("new", 8090)]);
        assert_eq!(ports(&view), vec![8090]);
    }

    #[test]
    fn test_changes_before_ticket_are_not_replayed() {
        let mut view = RegistryView::new();
        let first = view.begin_fetch();
        view.append_row(entry("x", 8100));
        let second = view.begin_fetch();

        view.apply_fetch(second, vec![entry("a", 8001)]);
        assert_eq!(ports(&view), vec![8001]);
        assert!(!view.apply_fetch(first, vec![]));
    }

    #[test]
    fn test_fail_fetch() {
        let mut view = RegistryView::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();
        assert!(!view.fail_fetch(first));
        assert!(view.is_fetching());
        assert!(view.fail_fetch(second));
        assert!(!view.is_fetching());
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let mut view = RegistryView::new();
        assert_eq!(view.selected_index(), None);

        view.render_all(vec![entry("a", 8001), entry("b", 8002)]);
        view.select_previous();
        assert_eq!(view.selected_entry().unwrap().name, "b");
        view.select_next();
        assert_eq!(view.selected_entry().unwrap().name, "a");

        view.select_last();
        view.remove_row(Port::new(8002).unwrap());
        assert_eq!(view.selected_index(), Some(0));
    }
}
