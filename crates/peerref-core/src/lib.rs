//! Codec between process-local dialog identities and the wire peer references
//! used to name them in outbound requests.
//!
//! The codec holds no state. Decode failures are reported through an injected
//! [`ports::DiagnosticSink`] and never surface as errors.

pub mod config;
pub mod domain;
pub mod errors;
pub mod input_dialog;
pub mod logging;
pub mod ports;
pub mod wire;

pub use errors::{Error, Result};
pub use input_dialog::InputDialogId;
