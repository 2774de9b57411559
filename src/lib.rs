//! `scrubstats` is a small library for turning dirty numeric sequences
//! (numeric-looking text, nulls, junk values) into cleaned `f64` sequences and
//! summarizing them with descriptive statistics.
//!
//! Two pure functions compose in sequence:
//!
//! - [`clean::clean`]: normalizes an arbitrary input sequence into an ordered
//!   sequence of finite numbers. Malformed entries are filtered, not rejected;
//!   cleaning never fails.
//! - [`summary::summarize`]: computes count/min/max/mean/median/population
//!   stdev over a non-empty sequence, failing only on empty input.
//!
//! ## Cleaning rules
//!
//! Per item, first match wins:
//!
//! - Null markers are dropped.
//! - Text is trimmed (blank text is dropped), commas are accepted as decimal
//!   separators (`"10,5"` → `10.5`), and unparsable text is dropped.
//! - Integers and floats convert directly.
//! - Any other type is dropped silently.
//!
//! NaN and infinite values never survive. With
//! [`types::CleanOptions::allow_negative`] set to `false`, strictly negative
//! values are dropped too (the default keeps them).
//!
//! ## Quick example
//!
//! ```rust
//! use scrubstats::{clean, summarize, CleanOptions};
//!
//! let cleaned = clean([" 1 ", "2,5", "x", "10"], &CleanOptions::default());
//! assert_eq!(cleaned, vec![1.0, 2.5, 10.0]);
//!
//! let summary = summarize(&cleaned).unwrap();
//! assert_eq!(summary.count, 3);
//! assert_eq!(summary.min, 1.0);
//! assert_eq!(summary.max, 10.0);
//! assert_eq!(summary.median, 2.5);
//! ```
//!
//! Heterogeneous input arrives as [`types::RawItem`]s, either built directly
//! or converted from [`serde_json::Value`]:
//!
//! ```rust
//! use scrubstats::{clean, CleanOptions};
//! use serde_json::json;
//!
//! let raw = vec![json!(" 1 "), json!(null), json!("x"), json!(-3), json!(10)];
//! let opts = CleanOptions::default().allow_negative(false);
//! assert_eq!(clean(raw, &opts), vec![1.0, 10.0]);
//! ```
//!
//! JSON documents can be cleaned in one step:
//!
//! ```rust
//! use scrubstats::{clean_json_str, CleanOptions};
//!
//! # fn main() -> Result<(), scrubstats::CleanError> {
//! let cleaned = clean_json_str(r#"["10,5", null, "", 3]"#, &CleanOptions::default())?;
//! assert_eq!(cleaned, vec![10.5, 3.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`clean`]: input normalization
//! - [`summary`]: summary-statistic computation
//! - [`types`]: raw item / options / summary record types
//! - [`error`]: the crate error type

pub mod clean;
pub mod error;
pub mod summary;
pub mod types;

pub use clean::{clean, clean_json_str, clean_with_report, CleanReport};
pub use error::{CleanError, CleanResult};
pub use summary::summarize;
pub use types::{CleanOptions, RawItem, Summary};
