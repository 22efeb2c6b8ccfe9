//! # Vector3D
//!
//! Three-dimensional vector arithmetic over `f64`.
//!
//! ## Overview
//!
//! The crate is built around a single value type, [`Vector3D`], and a set of
//! pure operations on it:
//!
//! - **Construction**: [`Vector3D::new`] and the associated constants
//! - **Length**: magnitude and Euclidean distance
//! - **Arithmetic**: addition, subtraction and scalar multiplication, also
//!   available through the standard operators
//! - **Products**: dot and cross products
//! - **Normalization**: the only fallible operation, rejecting the zero vector
//!
//! Every operation takes its inputs by value and returns a fresh vector, so
//! vectors can be shared freely across threads.
//!
//! ```
//! use vector3d::Vector3D;
//!
//! let v = Vector3D::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert!(Vector3D::ZERO.normalize().is_err());
//! ```

pub mod utils;
pub mod vector;

pub use utils::*;
pub use vector::*;

/// Core error type for vector operations and their text forms.
#[derive(thiserror::Error, Debug)]
pub enum VectorError {
    /// Normalization was asked for a vector with zero magnitude
    #[error("cannot normalize the zero vector")]
    ZeroVector,

    /// Text could not be read as a vector
    #[error("Parse error: {0}")]
    Parse(String),

    /// A NaN or infinite result cannot be written as JSON
    #[error("non-finite value cannot be encoded as JSON: {0}")]
    NonFinite(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type VectorResult<T> = Result<T, VectorError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric configuration constants.
pub mod config {
    /// Default tolerance for approximate float comparisons
    pub const DEFAULT_EPSILON: f64 = 1e-10;

    /// Magic constant seeding the `f64` fast inverse square root
    pub const INV_SQRT_MAGIC: u64 = 0x5FE6_EB50_C7B5_37A9;

    /// Default log level for the command-line front end
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}
