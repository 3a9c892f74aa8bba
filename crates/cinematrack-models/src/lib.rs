pub mod error;
pub mod genre;
pub mod movie;
pub mod movie_id;
pub mod watch_filter;

pub use error::ModelError;
pub use genre::Genre;
pub use movie::MovieEntry;
pub use movie_id::MovieId;
pub use watch_filter::WatchFilter;
