//! Validated persistence format.
//!
//! Collaborator layers may persist a match between transitions. The saved
//! form is strongly typed and re-validated on load: codes are re-parsed
//! by `Code`'s checked deserialization, every stored score is recomputed
//! against the opponent's secret, and the phase must cohere with the rest
//! of the state. Bytes that fail any check never become a `Match`.

pub mod saved;

pub use saved::{decode, encode, RestoreError, SavedMatch};
