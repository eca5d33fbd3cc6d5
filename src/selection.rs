mod state;

pub use state::SelectionState;
