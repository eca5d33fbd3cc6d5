mod autocomplete_events;
mod autocomplete_state;

pub use autocomplete_events::{KeyDisposition, PointerTarget};
pub use autocomplete_state::Autocomplete;
