//! Account nonce codec for blockchain transaction signing.
//!
//! Packs a chain account number and its transaction sequence into one signing
//! nonce that fits exactly in a double, and unpacks it again.
//!
//! ```
//! use account_nonce::{NonceCodec, NonceInfo};
//!
//! let codec = NonceCodec::default();
//! let nonce = codec.encode("5", "42").unwrap();
//! assert_eq!(nonce.get(), 5_242_922);
//! assert_eq!(codec.decode(nonce).unwrap(), NonceInfo::new("5", "42"));
//! ```

pub mod codec;
pub mod config;
pub mod observability;

pub use codec::{
    account_to_nonce, nonce_to_account_number, nonce_to_sequence, BoundaryPolicy, Nonce,
    NonceCodec, NonceError, NonceField, NonceInfo, NonceLayout, NonceResult, ParsePolicy,
};
pub use config::AppConfig;
