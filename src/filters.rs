//! Shared filter predicates used by every list view.
//!
//! Each screen combines its predicates with logical AND. The conventions are
//! fixed across the app: an empty search term matches everything, a `None`
//! select means "All", and an empty district multi-select matches everything
//! rather than nothing.

/// Case-insensitive substring match over one or more fields. An empty term
/// matches every record.
pub fn matches_text(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact-match select where `None` stands for "All".
pub fn matches_choice<T: PartialEq>(filter: Option<&T>, value: &T) -> bool {
    match filter {
        Some(wanted) => wanted == value,
        None => true,
    }
}

/// Multi-select inclusion. The empty selection means "no filter" and matches
/// everything.
pub fn matches_districts(selected: &[String], district: &str) -> bool {
    selected.is_empty() || selected.iter().any(|d| d == district)
}

/// Like [`matches_districts`] for records that belong to several districts
/// at once (staff patches).
pub fn matches_any_district(selected: &[String], districts: &[String]) -> bool {
    selected.is_empty() || districts.iter().any(|d| selected.iter().any(|s| s == d))
}

/// Toggle a district in a multi-select: present removes it, absent adds it.
pub fn toggle_district(selected: &mut Vec<String>, district: &str) {
    if let Some(pos) = selected.iter().position(|d| d == district) {
        selected.remove(pos);
    } else {
        selected.push(district.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches_text("", &["Margaret Thompson"]));
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        assert!(matches_text("thomp", &["Margaret Thompson"]));
        assert!(matches_text("OAK", &["Margaret Thompson", "123 Oak Street"]));
        assert!(!matches_text("davies", &["Margaret Thompson", "123 Oak Street"]));
    }

    #[test]
    fn none_select_matches_everything() {
        assert!(matches_choice::<u8>(None, &3));
        assert!(matches_choice(Some(&3u8), &3u8));
        assert!(!matches_choice(Some(&2u8), &3u8));
    }

    #[test]
    fn empty_multi_select_matches_everything() {
        assert!(matches_districts(&[], "North"));
        let selected = vec!["North".to_string()];
        assert!(matches_districts(&selected, "North"));
        assert!(!matches_districts(&selected, "South"));
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut selected = Vec::new();
        toggle_district(&mut selected, "North");
        assert_eq!(selected, vec!["North".to_string()]);
        toggle_district(&mut selected, "North");
        assert!(selected.is_empty());
    }
}
