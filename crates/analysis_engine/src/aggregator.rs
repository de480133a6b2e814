//! Summary statistics over the sales-only subset of a comparable set.

use models::{CompType, ComparableRecord, PriceSpread, SummaryStats};

use crate::format::{format_currency, format_percent_or_na};
use crate::AnalysisError;

/// Computes max/min/range/percent-change for the pre- and post-adjustment
/// prices of every comparable tagged `Sale`, plus included/excluded
/// counts and the narrative sentence.
///
/// Listings and excluded records are counted but never aggregated. An
/// input with zero sale records returns [`AnalysisError::NoSaleRecords`]
/// instead of evaluating min/max over an empty set.
pub fn summarize(comparables: &[ComparableRecord]) -> Result<SummaryStats, AnalysisError> {
    let sales: Vec<&ComparableRecord> = comparables
        .iter()
        .filter(|c| c.comp_type == CompType::Sale)
        .collect();
    if sales.is_empty() {
        return Err(AnalysisError::NoSaleRecords);
    }

    let pre_values: Vec<f64> = sales.iter().map(|c| c.pre_adjustment_price).collect();
    let post_values: Vec<f64> = sales.iter().map(|c| c.post_adjustment_price).collect();

    let pre = spread(&pre_values);
    let post = spread(&post_values);
    let narrative = narrative(&pre, &post);

    let included_count = sales.len();
    let excluded_count = comparables.len() - included_count;

    Ok(SummaryStats {
        pre,
        post,
        included_count,
        excluded_count,
        narrative,
    })
}

/// Max/min/range over a non-empty price list. Percent change is
/// `range / min` as a fraction; a zero minimum leaves it `None` so the
/// undefined division never surfaces as Infinity or NaN.
fn spread(values: &[f64]) -> PriceSpread {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for &v in values {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }
    let range = max - min;
    let percent_change = if min == 0.0 { None } else { Some(range / min) };
    PriceSpread {
        max,
        min,
        range,
        percent_change,
    }
}

/// Renders the fixed commentary sentence from the two spreads. Pure
/// string substitution with no timestamps or randomness, so the same
/// stats always produce byte-identical text (the copy-to-clipboard
/// export relies on this).
pub fn narrative(pre: &PriceSpread, post: &PriceSpread) -> String {
    format!(
        "A good indication that the individual adjustments represent the market reaction \
         can be seen in the difference between the pre-adjusted sale price range of {} or {} \
         to the post-adjusted sale price range of {} or {}. The tighter the adjusted range \
         suggests that the adjustments are more credible and reflective of the market.",
        format_currency(pre.range),
        format_percent_or_na(pre.percent_change, true),
        format_currency(post.range),
        format_percent_or_na(post.percent_change, true),
    )
}
