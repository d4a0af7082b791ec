pub mod filter;
pub mod guides;
pub mod listing;
pub mod pricing;
pub mod saved;
pub mod view;

pub use filter::{filter, headline, tab_states, FilterState, TypeFilter};
pub use listing::{Listing, ListingId, ListingType};
pub use pricing::{price_badge, PriceBadge};
pub use saved::{SaveIcon, SaveState, SavedEntry, SavedMirror, SavedRecord, SavedSnapshot, ToggleError};
pub use view::View;
