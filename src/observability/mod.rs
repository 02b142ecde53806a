//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader, CLI
//!     → logging.rs (structured log events via tracing)
//!     → stderr
//! ```

pub mod logging;
