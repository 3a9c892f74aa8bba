pub mod event;
pub mod filter;
pub mod store;
pub mod summary;
pub mod update;
pub mod view;

pub use event::{Event, IgnoreReason, Outcome};
pub use filter::visible_entries;
pub use store::{PendingForm, WatchlistState};
pub use summary::Summary;
pub use update::update;
pub use view::{EntryRow, WatchlistView};
