//! Room ownership: one match per room, mutated under mutual exclusion.

pub mod registry;

pub use registry::{RoomHandle, RoomId, RoomRegistry};
