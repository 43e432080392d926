//! Duplicate-run truncation over sorted sequences.
//!
//! A *run* is a maximal stretch of consecutive equal values. Runs longer
//! than a limit are dropped entirely; shorter runs are kept verbatim.
//!
//! - [`truncate_runs`]: one-shot function returning a `Vec`
//! - [`RunTruncator`]: reusable truncator with a fixed limit
//! - [`TruncatedRuns`]: lazy iterator over the kept values
//!
//! This module is independent of [`crate::set`].
//!
//! # Examples
//!
//! ```rust
//! use setwise::runs::truncate_runs;
//!
//! assert_eq!(truncate_runs(&[10, 20, 20, 20, 30], 2), vec![10, 30]);
//! assert_eq!(truncate_runs(&[10, 20, 20, 30], 2), vec![10, 20, 20, 30]);
//! ```

mod truncate;

pub use truncate::{RunTruncator, TruncatedRuns, truncate_runs};
