//! Types for the part splitting system.

/// One row of the marker → destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRoute {
    /// Part number (1-based) reported on the console.
    pub part: u8,

    /// Substring that identifies the part inside a fragment (e.g. "1 OF 3").
    pub marker: &'static str,

    /// File name the part is written to.
    pub file_name: &'static str,
}

impl PartRoute {
    /// Create a new route.
    #[must_use]
    pub const fn new(part: u8, marker: &'static str, file_name: &'static str) -> Self {
        Self {
            part,
            marker,
            file_name,
        }
    }

    /// Whether a fragment carries this route's marker.
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        fragment.contains(self.marker)
    }
}

/// A fragment that matched a route, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedPart {
    /// The route the fragment matched.
    pub route: PartRoute,

    /// Position of the fragment in the split sequence (0 = preamble).
    pub fragment_index: usize,

    /// Delimiter + part keyword + fragment text.
    pub contents: String,
}

impl RoutedPart {
    /// Part number (1-based).
    #[must_use]
    pub fn part(&self) -> u8 {
        self.route.part
    }

    /// Destination file name.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.route.file_name
    }
}
