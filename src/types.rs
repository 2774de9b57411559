//! Core data model: raw input items, cleaning options, and the summary record.
//!
//! The cleaner consumes [`RawItem`]s, which model dynamically-typed input over a
//! small closed set. Anything outside that set is [`RawItem::Other`] and is
//! always discarded.

use serde::{Deserialize, Serialize};

/// A single raw input item, before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum RawItem {
    /// Absent marker (a `None`, a JSON `null`, an empty cell).
    Null,
    /// Textual representation, possibly numeric-looking.
    Text(String),
    /// Integer numeric value.
    Int(i64),
    /// Floating-point numeric value.
    Float(f64),
    /// Any other value type; never survives cleaning.
    Other,
}

impl From<i64> for RawItem {
    fn from(v: i64) -> Self {
        RawItem::Int(v)
    }
}

impl From<f64> for RawItem {
    fn from(v: f64) -> Self {
        RawItem::Float(v)
    }
}

impl From<&str> for RawItem {
    fn from(v: &str) -> Self {
        RawItem::Text(v.to_string())
    }
}

impl From<String> for RawItem {
    fn from(v: String) -> Self {
        RawItem::Text(v)
    }
}

impl<T: Into<RawItem>> From<Option<T>> for RawItem {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => RawItem::Null,
        }
    }
}

/// JSON values map onto the closed input set: `null` stays absent, strings stay
/// text, numbers keep their integer/float distinction, and everything else
/// (bools, arrays, objects) falls through to [`RawItem::Other`].
impl From<serde_json::Value> for RawItem {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => RawItem::Null,
            serde_json::Value::String(s) => RawItem::Text(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawItem::Int(i)
                } else if let Some(f) = n.as_f64() {
                    RawItem::Float(f)
                } else {
                    RawItem::Other
                }
            }
            _ => RawItem::Other,
        }
    }
}

/// Options controlling a cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep strictly negative numbers. Defaults to `true`.
    pub allow_negative: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            allow_negative: true,
        }
    }
}

impl CleanOptions {
    /// Set whether strictly negative numbers survive cleaning.
    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }
}

/// Descriptive statistics over a non-empty sequence of finite numbers.
///
/// Produced by [`crate::summary::summarize`]. `min <= max` always holds and
/// `count` equals the length of the summarized sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of summarized values (always >= 1).
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value of the sorted sequence, or the average of the two middle
    /// values when the count is even.
    pub median: f64,
    /// Population standard deviation (divisor `n`); `0.0` for a single value.
    pub stdev: f64,
}
