use crate::event::Event;
use crate::store::WatchlistState;

/// Fold one event into the state, returning the next state.
///
/// This is the entry point the presentation layer drives: one call per user
/// event, followed by a full re-render from the returned state.
pub fn update(mut state: WatchlistState, event: Event) -> WatchlistState {
    state.apply(event);
    state
}
