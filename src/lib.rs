//! # setwise
//!
//! A hash-backed mathematical set with allocation-aware set algebra.
//!
//! ## Overview
//!
//! - **Sets**: [`set::Set`], an unordered collection of unique values with
//!   union, intersection, difference and symmetric difference, plus variants
//!   that combine a set with a lazy sequence without materializing it
//! - **Runs**: [`runs::truncate_runs`], which drops over-long runs of
//!   consecutive duplicates from a sorted sequence
//!
//! ## Feature Flags
//!
//! - `set`: the [`set`] module (default)
//! - `runs`: the [`runs`] module (default)
//! - `serde`: `Serialize`/`Deserialize` for [`set::Set`]
//! - `fxhash`: [`set::FxSet`], hashed with `rustc-hash`
//! - `ahash`: [`set::AHashSet`], hashed with `ahash`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let set_a = Set::from_slice(&[1, 2, 3]);
//! let set_b = Set::from_slice(&[2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b).len(), 4);
//! assert_eq!(truncate_runs(&[1, 1, 1, 2], 2), vec![2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public items of every enabled module.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "runs")]
    pub use crate::runs::*;
}

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "runs")]
pub mod runs;
