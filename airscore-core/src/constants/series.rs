//! History Chart Limits

/// Target number of points on a history chart.
///
/// Logs with more entries in range are stride-sampled down toward this
/// figure. Stride sampling keeps exact readings, so the result can exceed
/// the target when the count is not a multiple of it (100 entries give 17
/// points).
pub const DEFAULT_MAX_CHART_POINTS: usize = 15;
