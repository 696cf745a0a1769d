//! Document state and logic (UI-agnostic).

mod state;

pub use state::Document;
