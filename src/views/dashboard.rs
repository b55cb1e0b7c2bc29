use crate::models::{ActivityLogEntry, Client, Priority};
use crate::store::AppState;

/// Landing screen: headline counters, the activity feed and stock warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardView {
    pub activity_cursor: usize,
}

impl DashboardView {
    /// Unresolved activity, newest first. The timestamps are ISO strings so
    /// lexicographic order is chronological order.
    pub fn activity_feed<'a>(&self, state: &'a AppState) -> Vec<&'a ActivityLogEntry> {
        let mut feed: Vec<_> = state
            .activity_log
            .iter()
            .filter(|entry| !entry.resolved)
            .collect();
        feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        feed
    }

    pub fn urgent_alerts<'a>(&self, state: &'a AppState) -> Vec<&'a ActivityLogEntry> {
        self.activity_feed(state)
            .into_iter()
            .filter(|entry| entry.priority >= Priority::High)
            .collect()
    }

    /// Clients with any medication flagged as running low.
    pub fn low_stock_clients<'a>(&self, state: &'a AppState) -> Vec<&'a Client> {
        state.clients.iter().filter(|c| c.has_low_stock()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn feed_is_newest_first_and_unresolved_only() {
        let mut state = mock::seed();
        state.activity_log[0].resolved = true;
        let view = DashboardView::default();

        let feed = view.activity_feed(&state);
        assert!(feed.iter().all(|e| !e.resolved));
        assert!(feed
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));
    }

    #[test]
    fn urgent_alerts_drop_low_and_medium() {
        let state = mock::seed();
        let view = DashboardView::default();
        assert!(view
            .urgent_alerts(&state)
            .iter()
            .all(|e| e.priority >= Priority::High));
    }

    #[test]
    fn low_stock_flags_come_from_the_medication_list() {
        let state = mock::seed();
        let view = DashboardView::default();
        let names: Vec<_> = view
            .low_stock_clients(&state)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert!(names.contains(&"Margaret Thompson"));
        assert!(!names.contains(&"Arthur Pemberton"));
    }
}
