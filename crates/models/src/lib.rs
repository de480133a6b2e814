use serde::{Deserialize, Serialize};

// Input models
//
// These mirror what the appraisal parser emits. The wire format uses the
// parser's short snake_case names (pre_adj, post_adj, ...); spelled-out
// snake_case and camelCase spellings are accepted as aliases so either
// boundary convention normalizes to the same records.

/// Inclusion tag for a comparable. Only completed sales feed the
/// statistics and the plot; any tag the parser emits that is not
/// `Sale` or `Listing` folds into `Excluded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompType {
    Sale,
    Listing,
    #[serde(other)]
    Excluded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparableRecord {
    #[serde(alias = "propertyType", default)]
    pub property_type: String,
    pub address: String,
    #[serde(
        rename = "pre_adj",
        alias = "pre_adjustment_price",
        alias = "preAdjustmentPrice"
    )]
    pub pre_adjustment_price: f64,
    #[serde(
        rename = "post_adj",
        alias = "post_adjustment_price",
        alias = "postAdjustmentPrice"
    )]
    pub post_adjustment_price: f64,
    #[serde(alias = "compType")]
    pub comp_type: CompType,
    /// Net adjustment magnitude, already scaled to a percent value
    /// (5.2 means 5.2%), as persisted by the parser.
    #[serde(
        rename = "total_adj_percent",
        alias = "total_adjustment_percent",
        alias = "totalAdjustmentPercent",
        default
    )]
    pub total_adjustment_percent: f64,
    /// Display-only; the engine never interprets it.
    #[serde(alias = "saleDate", default)]
    pub sale_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProperty {
    #[serde(alias = "propertyType", default)]
    pub property_type: String,
    #[serde(default)]
    pub address: String,
    /// Contract sale price; plotted as the reference baseline.
    #[serde(
        rename = "pre_adj",
        alias = "pre_adjustment_price",
        alias = "preAdjustmentPrice"
    )]
    pub pre_adjustment_price: f64,
}

/// One parsed appraisal document, the immutable snapshot both engine
/// components consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalInput {
    #[serde(alias = "subjectProperty", default)]
    pub subject_property: Option<SubjectProperty>,
    #[serde(default)]
    pub comparables: Vec<ComparableRecord>,
}

// Output models

/// Max/min/range over one side of the comparable set.
/// `percent_change` is a fraction (0.052 = 5.2%); `None` stands in for
/// the N/A sentinel when `min` is zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSpread {
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub percent_change: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    pub pre: PriceSpread,
    pub post: PriceSpread,
    pub included_count: usize,
    pub excluded_count: usize,
    pub narrative: String,
}

/// Direction tag for a pre-adjustment point marker. The renderer picks
/// the glyph; the engine only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerDirection {
    Up,
    Down,
}

/// One scatter point. `counterpart_price` is the other side of the same
/// comparable (post for a pre point and vice versa) so a tooltip can show
/// both without re-joining the series. `marker` is present on
/// pre-adjustment points only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub x: usize,
    pub y: f64,
    pub address: String,
    pub counterpart_price: f64,
    pub percent_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub marker: Option<MarkerDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePoint {
    pub x: usize,
    pub y: f64,
}

/// Constant-height baseline at the subject's sale price, spanning the
/// full x extent of the sales series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectLine {
    pub label: String,
    pub price: f64,
    pub points: Vec<LinePoint>,
}

/// Chart-ready dataset. `pre_adjustment` and `post_adjustment` are
/// same-length and index-aligned: point i in both series belongs to the
/// same comparable, so the renderer can draw connector segments by
/// position alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotSeries {
    pub pre_adjustment: Vec<SeriesPoint>,
    pub post_adjustment: Vec<SeriesPoint>,
    pub subject_line: SubjectLine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub generated_at: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Persisted analysis artifact (CLI output, API GET payload). Both
/// payload fields are `None` when the document held no sale records:
/// the neutral "no applicable data" state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub metadata: AnalysisMetadata,
    pub summary: Option<SummaryStats>,
    pub plot: Option<PlotSeries>,
}
