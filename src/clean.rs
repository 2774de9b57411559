//! Input normalization: turns heterogeneous, possibly malformed items into an
//! ordered sequence of finite `f64` values.
//!
//! Cleaning never fails. Every malformed entry (null, blank or unparsable
//! text, unsupported type, NaN/infinite result, disallowed sign) is dropped
//! from the output; surviving values keep their relative input order.

use crate::error::CleanResult;
use crate::types::{CleanOptions, RawItem};

/// Per-item tallies of a cleaning pass.
///
/// Every input item increments exactly one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Items that survived cleaning.
    pub kept: usize,
    /// Null/absent markers.
    pub nulls: usize,
    /// Text that was empty after trimming.
    pub blank_text: usize,
    /// Text that did not parse as a number.
    pub unparsable_text: usize,
    /// Values that came out NaN or infinite.
    pub non_finite: usize,
    /// Negative values dropped because [`CleanOptions::allow_negative`] is false.
    pub negative: usize,
    /// Items of an unsupported type.
    pub other_type: usize,
}

impl CleanReport {
    /// Total number of dropped items.
    pub fn dropped(&self) -> usize {
        self.nulls
            + self.blank_text
            + self.unparsable_text
            + self.non_finite
            + self.negative
            + self.other_type
    }
}

/// Clean a sequence of raw items into finite `f64` values.
///
/// Rules, per item, first match wins:
///
/// - Null markers are discarded.
/// - Text is trimmed; blank text is discarded. Commas are treated as decimal
///   separators (`"10,5"` parses as `10.5`); text that still does not parse
///   as a number is discarded.
/// - Integer and float values convert to `f64` directly.
/// - Anything else is discarded silently.
///
/// The obtained number is then dropped if it is NaN or infinite, or if it is
/// strictly negative while `options.allow_negative` is false.
///
/// Total over every input, including the empty sequence (returns empty).
pub fn clean<I>(items: I, options: &CleanOptions) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Into<RawItem>,
{
    clean_with_report(items, options).0
}

/// Like [`clean`], additionally reporting why items were dropped.
pub fn clean_with_report<I>(items: I, options: &CleanOptions) -> (Vec<f64>, CleanReport)
where
    I: IntoIterator,
    I::Item: Into<RawItem>,
{
    let mut cleaned = Vec::new();
    let mut report = CleanReport::default();

    for item in items {
        let num = match item.into() {
            RawItem::Null => {
                report.nulls += 1;
                continue;
            }
            RawItem::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    report.blank_text += 1;
                    continue;
                }
                match trimmed.replace(',', ".").parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => {
                        report.unparsable_text += 1;
                        continue;
                    }
                }
            }
            RawItem::Int(i) => i as f64,
            RawItem::Float(f) => f,
            RawItem::Other => {
                report.other_type += 1;
                continue;
            }
        };

        if !num.is_finite() {
            report.non_finite += 1;
            continue;
        }
        if !options.allow_negative && num < 0.0 {
            report.negative += 1;
            continue;
        }

        report.kept += 1;
        cleaned.push(num);
    }

    (cleaned, report)
}

/// Parse `input` as a JSON array and clean its elements.
///
/// Elements go through the same silent-drop rules as [`clean`] (via the
/// [`RawItem`] conversion of JSON values); the only error is a document that
/// is not a valid JSON array.
pub fn clean_json_str(input: &str, options: &CleanOptions) -> CleanResult<Vec<f64>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
    Ok(clean(values, options))
}

#[cfg(test)]
mod tests {
    use super::{clean, clean_with_report};
    use crate::types::{CleanOptions, RawItem};

    #[test]
    fn clean_converts_plain_numbers() {
        let out = clean([1_i64, 2, 3], &CleanOptions::default());
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn clean_trims_text_and_drops_unparsable() {
        let out = clean([" 10 ", " 20.5 ", "x"], &CleanOptions::default());
        assert_eq!(out, vec![10.0, 20.5]);
    }

    #[test]
    fn clean_accepts_comma_decimal_separator() {
        let items: Vec<RawItem> = vec![
            RawItem::Text("10,5".to_string()),
            RawItem::Null,
            RawItem::Text(String::new()),
            RawItem::Text("   ".to_string()),
        ];
        assert_eq!(clean(items, &CleanOptions::default()), vec![10.5]);
    }

    #[test]
    fn clean_drops_non_finite_values() {
        let items: Vec<RawItem> = vec![
            RawItem::Float(f64::NAN),
            RawItem::Float(f64::INFINITY),
            RawItem::Float(f64::NEG_INFINITY),
            RawItem::Text("-".to_string()),
        ];
        assert_eq!(clean(items, &CleanOptions::default()), Vec::<f64>::new());
    }

    #[test]
    fn clean_drops_negatives_when_disallowed() {
        let opts = CleanOptions::default().allow_negative(false);
        assert_eq!(clean([-5_i64, 0, 5], &opts), vec![0.0, 5.0]);
        // Negative zero is not strictly less than zero.
        assert_eq!(clean([-0.0_f64], &opts), vec![-0.0]);
    }

    #[test]
    fn clean_keeps_negatives_by_default() {
        assert_eq!(
            clean([-5_i64, 0, 5], &CleanOptions::default()),
            vec![-5.0, 0.0, 5.0]
        );
    }

    #[test]
    fn clean_drops_unsupported_types() {
        let items = vec![RawItem::Other, RawItem::Other];
        assert_eq!(clean(items, &CleanOptions::default()), Vec::<f64>::new());
    }

    #[test]
    fn clean_of_empty_input_is_empty() {
        let items: Vec<RawItem> = vec![];
        assert_eq!(clean(items, &CleanOptions::default()), Vec::<f64>::new());
    }

    #[test]
    fn clean_is_idempotent_over_its_own_output() {
        let once = clean([" 1 ", "2,5", "x", "3"], &CleanOptions::default());
        let twice = clean(once.clone(), &CleanOptions::default());
        assert_eq!(once, twice);
    }

    #[test]
    fn report_accounts_for_every_item() {
        let items: Vec<RawItem> = vec![
            RawItem::Int(1),
            RawItem::Null,
            RawItem::Text("  ".to_string()),
            RawItem::Text("nope".to_string()),
            RawItem::Float(f64::NAN),
            RawItem::Int(-2),
            RawItem::Other,
        ];
        let opts = CleanOptions::default().allow_negative(false);
        let (out, report) = clean_with_report(items, &opts);

        assert_eq!(out, vec![1.0]);
        assert_eq!(report.kept, 1);
        assert_eq!(report.nulls, 1);
        assert_eq!(report.blank_text, 1);
        assert_eq!(report.unparsable_text, 1);
        assert_eq!(report.non_finite, 1);
        assert_eq!(report.negative, 1);
        assert_eq!(report.other_type, 1);
        assert_eq!(report.kept + report.dropped(), 7);
    }
}
