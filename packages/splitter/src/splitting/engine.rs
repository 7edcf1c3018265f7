//! Split engine that cuts the setup document into routed parts.

use super::config::PART_ROUTES;
use super::types::{PartRoute, RoutedPart};
use crate::config::{DELIMITER, PART_KEYWORD};

/// Split content on [`DELIMITER`].
///
/// Plain substring split: every non-overlapping occurrence is consumed and
/// the pieces around them are returned in order. The first piece is the
/// preamble before the first delimiter (empty if the document starts with
/// one). Content without any delimiter comes back as a single fragment.
///
/// # Examples
/// ```
/// use lunonex_sql_splitter::config::DELIMITER;
/// use lunonex_sql_splitter::splitting::split_fragments;
///
/// let content = format!("{DELIMITER}1 OF 3\nAAA");
/// assert_eq!(split_fragments(&content), vec!["", "1 OF 3\nAAA"]);
/// ```
#[must_use]
pub fn split_fragments(content: &str) -> Vec<&str> {
    content.split(DELIMITER).collect()
}

/// Restore the consumed header in front of a fragment.
#[must_use]
pub fn reconstruct_part(fragment: &str) -> String {
    let mut contents =
        String::with_capacity(DELIMITER.len() + PART_KEYWORD.len() + fragment.len());
    contents.push_str(DELIMITER);
    contents.push_str(PART_KEYWORD);
    contents.push_str(fragment);
    contents
}

/// Engine for splitting a setup document into parts.
///
/// Holds the routing table; fragments are routed by marker content only,
/// never by their position in the document.
pub struct SplitEngine {
    routes: &'static [PartRoute],
}

impl SplitEngine {
    /// Create a new split engine over a routing table (in priority order).
    #[must_use]
    pub fn new(routes: &'static [PartRoute]) -> Self {
        Self { routes }
    }

    /// Find the first route whose marker the fragment contains.
    #[must_use]
    pub fn route(&self, fragment: &str) -> Option<&'static PartRoute> {
        self.routes.iter().find(|route| route.matches(fragment))
    }

    /// Split content and route every fragment.
    ///
    /// Returns the matched fragments in document order. Fragments without a
    /// marker are dropped silently. Two fragments with the same marker both
    /// show up; written in order, the later one wins.
    #[must_use]
    pub fn split(&self, content: &str) -> Vec<RoutedPart> {
        let fragments = split_fragments(content);
        tracing::debug!(fragments = fragments.len(), "Split setup document");

        fragments
            .into_iter()
            .enumerate()
            .filter_map(|(fragment_index, fragment)| {
                self.route(fragment).map(|route| RoutedPart {
                    route: *route,
                    fragment_index,
                    contents: reconstruct_part(fragment),
                })
            })
            .collect()
    }
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new(&PART_ROUTES)
    }
}
