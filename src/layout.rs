//! Layout module for tracking UI component regions
//!
//! The renderer records where each component landed in `LayoutRegions`
//! every frame, and `region_at()` determines which component is at a given
//! screen position so mouse presses can be routed.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
