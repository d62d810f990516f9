//! Wire-level peer references, as the remote schema serializes them.

pub mod json;
pub mod types;
