//! Scatter-plot dataset derivation.
//!
//! The engine emits plain data: two index-aligned point series, a
//! direction tag per pre-adjustment point, and a constant baseline at the
//! subject's sale price. Glyph drawing and connector rendering belong to
//! the chart layer, which pairs points by position.

use models::{
    CompType, ComparableRecord, LinePoint, MarkerDirection, PlotSeries, SeriesPoint, SubjectLine,
    SubjectProperty,
};

use crate::format::{format_currency, format_signed_percent};

/// Which side of the adjustment a point belongs to; tooltip rendering
/// needs it to know whether `y` or `counterpart_price` is the pre price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    PreAdjustment,
    PostAdjustment,
}

/// Builds the chart dataset for a comparable set, or `None` when no
/// record is tagged `Sale`. Zero sales means there is no chart to
/// render, not an error.
pub fn build_plot(
    comparables: &[ComparableRecord],
    subject: Option<&SubjectProperty>,
) -> Option<PlotSeries> {
    let sales: Vec<&ComparableRecord> = comparables
        .iter()
        .filter(|c| c.comp_type == CompType::Sale)
        .collect();
    if sales.is_empty() {
        return None;
    }

    let pre_adjustment: Vec<SeriesPoint> = sales
        .iter()
        .enumerate()
        .map(|(i, c)| SeriesPoint {
            x: i + 1,
            y: c.pre_adjustment_price,
            address: c.address.clone(),
            counterpart_price: c.post_adjustment_price,
            percent_change: percent_change(c),
            marker: Some(marker_for(c)),
        })
        .collect();

    let post_adjustment: Vec<SeriesPoint> = sales
        .iter()
        .enumerate()
        .map(|(i, c)| SeriesPoint {
            x: i + 1,
            y: c.post_adjustment_price,
            address: c.address.clone(),
            counterpart_price: c.pre_adjustment_price,
            percent_change: percent_change(c),
            marker: None,
        })
        .collect();

    let subject_price = subject.map(|s| s.pre_adjustment_price).unwrap_or(0.0);
    let points = (0..=sales.len())
        .map(|x| LinePoint {
            x,
            y: subject_price,
        })
        .collect();
    let subject_line = SubjectLine {
        label: format!("Subject Sale Price: {}", format_currency(subject_price)),
        price: subject_price,
        points,
    };

    Some(PlotSeries {
        pre_adjustment,
        post_adjustment,
        subject_line,
    })
}

/// Adjustment direction of one comparable. Ties point down: only a
/// strict increase earns the upward marker.
fn marker_for(c: &ComparableRecord) -> MarkerDirection {
    if c.post_adjustment_price > c.pre_adjustment_price {
        MarkerDirection::Up
    } else {
        MarkerDirection::Down
    }
}

/// `(post - pre) / pre` as a fraction, `None` when the pre price is zero.
fn percent_change(c: &ComparableRecord) -> Option<f64> {
    if c.pre_adjustment_price == 0.0 {
        None
    } else {
        Some((c.post_adjustment_price - c.pre_adjustment_price) / c.pre_adjustment_price)
    }
}

/// Tooltip lines for one scatter point: address, both prices, and the
/// signed percent change. The chart layer joins them however its tooltip
/// widget expects.
pub fn point_tooltip(point: &SeriesPoint, kind: SeriesKind) -> Vec<String> {
    let (pre, post) = match kind {
        SeriesKind::PreAdjustment => (point.y, point.counterpart_price),
        SeriesKind::PostAdjustment => (point.counterpart_price, point.y),
    };
    let percent = match point.percent_change {
        Some(p) => format_signed_percent(p, true),
        None => "N/A".to_string(),
    };
    vec![
        format!("Address: {}", point.address),
        format!("Pre-Adjustment Sale Price: {}", format_currency(pre)),
        format!("Post-Adjustment Sale Price: {}", format_currency(post)),
        format!("Percent Change: {}", percent),
    ]
}

/// The reference line shows only the subject's formatted price.
pub fn subject_tooltip(line: &SubjectLine) -> String {
    format!("Subject Property Sold Price: {}", format_currency(line.price))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(pre: f64, post: f64, comp_type: CompType) -> ComparableRecord {
        ComparableRecord {
            property_type: "Comparable".to_string(),
            address: "1 Test St".to_string(),
            pre_adjustment_price: pre,
            post_adjustment_price: post,
            comp_type,
            total_adjustment_percent: 0.0,
            sale_date: String::new(),
        }
    }

    fn subject(price: f64) -> SubjectProperty {
        SubjectProperty {
            property_type: "Subject".to_string(),
            address: "Subject Property".to_string(),
            pre_adjustment_price: price,
        }
    }

    #[test]
    fn test_build_plot_none_without_sales() {
        assert!(build_plot(&[], Some(&subject(205000.0))).is_none());

        let only_listings = vec![
            comp(100000.0, 100000.0, CompType::Listing),
            comp(120000.0, 120000.0, CompType::Excluded),
        ];
        assert!(build_plot(&only_listings, Some(&subject(205000.0))).is_none());
    }

    #[test]
    fn test_series_aligned_and_sales_only() {
        let comps = vec![
            comp(200000.0, 210000.0, CompType::Sale),
            comp(190000.0, 190000.0, CompType::Excluded),
            comp(180000.0, 175000.0, CompType::Sale),
        ];
        let plot = build_plot(&comps, Some(&subject(205000.0))).unwrap();

        assert_eq!(plot.pre_adjustment.len(), 2);
        assert_eq!(plot.post_adjustment.len(), 2);
        for (i, (pre, post)) in plot
            .pre_adjustment
            .iter()
            .zip(plot.post_adjustment.iter())
            .enumerate()
        {
            // Same x, same comparable, mirrored counterpart prices
            assert_eq!(pre.x, i + 1);
            assert_eq!(post.x, i + 1);
            assert_eq!(pre.address, post.address);
            assert_eq!(pre.counterpart_price, post.y);
            assert_eq!(post.counterpart_price, pre.y);
        }
        // The excluded record was skipped without renumbering
        assert_eq!(plot.pre_adjustment[1].y, 180000.0);
        assert_eq!(plot.pre_adjustment[1].x, 2);
    }

    #[test]
    fn test_marker_orientation_policy() {
        let comps = vec![
            comp(100.0, 110.0, CompType::Sale),
            comp(100.0, 90.0, CompType::Sale),
            comp(100.0, 100.0, CompType::Sale),
        ];
        let plot = build_plot(&comps, None).unwrap();
        let markers: Vec<_> = plot
            .pre_adjustment
            .iter()
            .map(|p| p.marker.unwrap())
            .collect();
        assert_eq!(
            markers,
            vec![
                MarkerDirection::Up,
                MarkerDirection::Down,
                // Tie renders downward
                MarkerDirection::Down,
            ]
        );
        // Post-adjustment points carry no direction; the renderer draws
        // them with a uniform glyph
        assert!(plot.post_adjustment.iter().all(|p| p.marker.is_none()));
    }

    #[test]
    fn test_subject_line_spans_series() {
        let comps = vec![
            comp(200000.0, 210000.0, CompType::Sale),
            comp(180000.0, 175000.0, CompType::Sale),
        ];
        let plot = build_plot(&comps, Some(&subject(205000.0))).unwrap();
        let line = &plot.subject_line;

        assert_eq!(line.price, 205000.0);
        assert_eq!(line.label, "Subject Sale Price: $205,000.00");
        assert_eq!(line.points.len(), 3); // x = 0, 1, 2
        assert_eq!(line.points.first().unwrap().x, 0);
        assert_eq!(line.points.last().unwrap().x, 2);
        assert!(line.points.iter().all(|p| p.y == 205000.0));
    }

    #[test]
    fn test_subject_absent_baselines_at_zero() {
        let comps = vec![comp(200000.0, 210000.0, CompType::Sale)];
        let plot = build_plot(&comps, None).unwrap();
        assert_eq!(plot.subject_line.price, 0.0);
        assert_eq!(plot.subject_line.label, "Subject Sale Price: $0.00");
    }

    #[test]
    fn test_point_percent_change() {
        let comps = vec![comp(200000.0, 210000.0, CompType::Sale)];
        let plot = build_plot(&comps, None).unwrap();
        let pct = plot.pre_adjustment[0].percent_change.unwrap();
        assert!((pct - 0.05).abs() < 1e-12);
        assert_eq!(plot.post_adjustment[0].percent_change, Some(pct));
    }

    #[test]
    fn test_point_percent_change_zero_pre() {
        let comps = vec![comp(0.0, 50000.0, CompType::Sale)];
        let plot = build_plot(&comps, None).unwrap();
        assert_eq!(plot.pre_adjustment[0].percent_change, None);
    }

    #[test]
    fn test_point_tooltip_lines() {
        let comps = vec![comp(200000.0, 210000.0, CompType::Sale)];
        let plot = build_plot(&comps, None).unwrap();

        let lines = point_tooltip(&plot.pre_adjustment[0], SeriesKind::PreAdjustment);
        assert_eq!(
            lines,
            vec![
                "Address: 1 Test St".to_string(),
                "Pre-Adjustment Sale Price: $200,000.00".to_string(),
                "Post-Adjustment Sale Price: $210,000.00".to_string(),
                "Percent Change: +5.00%".to_string(),
            ]
        );

        // The post point reports the same prices from the other side
        let lines = point_tooltip(&plot.post_adjustment[0], SeriesKind::PostAdjustment);
        assert_eq!(lines[1], "Pre-Adjustment Sale Price: $200,000.00");
        assert_eq!(lines[2], "Post-Adjustment Sale Price: $210,000.00");
    }

    #[test]
    fn test_subject_tooltip() {
        let comps = vec![comp(200000.0, 210000.0, CompType::Sale)];
        let plot = build_plot(&comps, Some(&subject(205000.0))).unwrap();
        assert_eq!(
            subject_tooltip(&plot.subject_line),
            "Subject Property Sold Price: $205,000.00"
        );
    }

    #[test]
    fn test_build_plot_idempotent() {
        let comps = vec![
            comp(200000.0, 210000.0, CompType::Sale),
            comp(180000.0, 175000.0, CompType::Sale),
        ];
        let a = build_plot(&comps, Some(&subject(205000.0)));
        let b = build_plot(&comps, Some(&subject(205000.0)));
        assert_eq!(a, b);
    }
}
