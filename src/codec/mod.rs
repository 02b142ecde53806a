//! Nonce codec subsystem.
//!
//! # Data Flow
//! ```text
//! Chain account query ({ account_number, sequence } as decimal strings)
//!     → parse.rs (decimal parsing, strict or lenient)
//!     → layout.rs (bit widths and limits)
//!     → nonce.rs (bounds check, pack into one integer)
//!     → Nonce (<= 2^53 - 1, consumed by the signer)
//!
//! Reverse path:
//!     Nonce → nonce.rs (shift / mask) → decimal strings
//! ```
//!
//! # Constraints
//! - Account number and sequence occupy disjoint bit ranges
//! - Every nonce fits exactly in an IEEE-754 double
//! - All arithmetic is done on u64, never on floats
//! - Pure functions only: no I/O, no logging, no shared state

pub mod layout;
pub mod nonce;
pub mod parse;
pub mod types;

pub use layout::{LayoutError, NonceLayout};
pub use nonce::{account_to_nonce, nonce_to_account_number, nonce_to_sequence, NonceCodec};
pub use parse::ParsePolicy;
pub use types::{BoundaryPolicy, Nonce, NonceError, NonceField, NonceInfo, NonceResult};
