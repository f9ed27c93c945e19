pub mod event;
pub mod listing;

pub use event::Event;
pub use listing::EventListing;
