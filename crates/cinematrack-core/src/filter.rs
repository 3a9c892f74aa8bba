use cinematrack_models::{MovieEntry, WatchFilter};

/// Entries that pass `filter`, in their original relative order
pub fn visible_entries(
    entries: &[MovieEntry],
    filter: WatchFilter,
) -> impl Iterator<Item = &MovieEntry> + '_ {
    entries.iter().filter(move |entry| filter.matches(entry))
}
