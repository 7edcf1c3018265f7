//! Routing table for the Lunonex setup parts.

use super::engine::SplitEngine;
use super::types::PartRoute;

/// Marker → destination table, in priority order.
///
/// A fragment is routed by the first marker it contains. If a fragment holds
/// more than one marker the later rows are ignored for it.
///
/// ```text
/// "1 OF 3" -> SUPABASE-PART-1-SOCIAL-PLATFORM.sql
/// "2 OF 3" -> SUPABASE-PART-2-TIERS-MARKETPLACES.sql
/// "3 OF 3" -> SUPABASE-PART-3-CUSTOMIZATION.sql
/// ```
pub static PART_ROUTES: [PartRoute; 3] = [
    PartRoute::new(1, "1 OF 3", "SUPABASE-PART-1-SOCIAL-PLATFORM.sql"),
    PartRoute::new(2, "2 OF 3", "SUPABASE-PART-2-TIERS-MARKETPLACES.sql"),
    PartRoute::new(3, "3 OF 3", "SUPABASE-PART-3-CUSTOMIZATION.sql"),
];

/// Find the route for a fragment in [`PART_ROUTES`], if any.
///
/// # Examples
/// ```
/// use lunonex_sql_splitter::splitting::route_fragment;
///
/// let route = route_fragment("2 OF 3\n-- tiers").unwrap();
/// assert_eq!(route.file_name, "SUPABASE-PART-2-TIERS-MARKETPLACES.sql");
/// assert!(route_fragment("-- preamble").is_none());
/// ```
#[must_use]
pub fn route_fragment(fragment: &str) -> Option<&'static PartRoute> {
    SplitEngine::default().route(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_numbered_in_order() {
        let parts: Vec<u8> = PART_ROUTES.iter().map(|r| r.part).collect();
        assert_eq!(parts, vec![1, 2, 3]);
    }

    #[test]
    fn test_route_each_marker() {
        assert_eq!(route_fragment("1 OF 3").map(|r| r.part), Some(1));
        assert_eq!(route_fragment("2 OF 3").map(|r| r.part), Some(2));
        assert_eq!(route_fragment("3 OF 3").map(|r| r.part), Some(3));
    }

    #[test]
    fn test_route_no_marker() {
        assert!(route_fragment("").is_none());
        assert!(route_fragment("4 OF 3").is_none());
        assert!(route_fragment("1 of 3").is_none());
    }

    #[test]
    fn test_route_multiple_markers_first_in_priority_wins() {
        // Priority follows the table, not the position in the text.
        let route = route_fragment("3 OF 3 ... 2 OF 3 ... 1 OF 3").unwrap();
        assert_eq!(route.part, 1);

        let route = route_fragment("3 OF 3 then 2 OF 3").unwrap();
        assert_eq!(route.part, 2);
    }
}
