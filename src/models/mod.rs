pub mod listing;

pub use listing::{
    ListingEntry, ListingModel, ListingSnapshot, FLAG_EDITABLE, LISTING_FORMAT,
};
