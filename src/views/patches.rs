use crate::filters::matches_districts;
use crate::models::Patch;

/// Capacity board for the service areas.
#[derive(Debug, Clone, Default)]
pub struct PatchesView {
    pub districts: Vec<String>,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchTotals {
    pub clients: u32,
    pub staff: u32,
    pub available_staff: u32,
    pub pending_clients: u32,
}

impl PatchesView {
    pub fn filtered<'a>(&self, patches: &'a [Patch]) -> Vec<&'a Patch> {
        patches
            .iter()
            .filter(|patch| matches_districts(&self.districts, &patch.district))
            .collect()
    }

    /// Totals across the filtered rows, for the board footer.
    pub fn totals(&self, patches: &[Patch]) -> PatchTotals {
        self.filtered(patches)
            .into_iter()
            .fold(PatchTotals::default(), |mut totals, patch| {
                totals.clients += patch.client_count;
                totals.staff += patch.staff_count;
                totals.available_staff += patch.available_staff;
                totals.pending_clients += patch.pending_clients;
                totals
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn district_filter_narrows_the_board() {
        let patches = mock::patches();
        let view = PatchesView {
            districts: vec!["North".to_string(), "South".to_string()],
            ..PatchesView::default()
        };
        let rows = view.filtered(&patches);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn totals_cover_the_filtered_rows_only() {
        let patches = mock::patches();
        let view = PatchesView {
            districts: vec!["Central".to_string()],
            ..PatchesView::default()
        };
        let totals = view.totals(&patches);
        assert_eq!(totals.clients, 18);
        assert_eq!(totals.staff, 7);
    }

    #[test]
    fn ratio_survives_an_empty_patch() {
        let mut patch = mock::patches()[0].clone();
        patch.staff_count = 0;
        patch.available_staff = 0;
        assert_eq!(patch.client_staff_ratio(), 0.0);
        assert_eq!(patch.availability_percent(), 0.0);
    }
}
