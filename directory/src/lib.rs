pub mod listing;
pub mod map;
pub mod utils;

pub use listing::{build_listing, summarize, ListingFilter, ResourceSummary};
pub use utils::clamp;
pub use utils::geo::{distance_between, distance_miles};
pub use utils::schedule::{day_and_time, format_schedule, is_open};
