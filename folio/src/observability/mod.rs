//! Observability for `Folio`.
//!
//! Structured logging to stderr. Request-level detail is emitted at
//! `debug`, lifecycle events at `info`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
