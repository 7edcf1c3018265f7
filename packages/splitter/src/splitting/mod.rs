//! Part splitting system for the combined setup document.
//!
//! The document is cut on a fixed delimiter and every fragment is routed to
//! a part file by the marker it contains ("1 OF 3", "2 OF 3", "3 OF 3").

mod config;
mod engine;
mod types;

pub use config::{route_fragment, PART_ROUTES};
pub use engine::{reconstruct_part, split_fragments, SplitEngine};
pub use types::{PartRoute, RoutedPart};
