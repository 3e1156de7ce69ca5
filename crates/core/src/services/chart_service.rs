use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

use crate::format::format_amount;
use crate::models::chart::{Chart, GridSpec, Primitive, TextAnchor, TextBaseline, Tick};
use crate::models::transaction::{CumulativePoint, ProjectTotal};

// ── Line chart geometry ─────────────────────────────────────────────
const GRAPH_WIDTH: f64 = 800.0;
const GRAPH_HEIGHT: f64 = 400.0;
const X_PADDING: f64 = 50.0;
const Y_PADDING: f64 = 50.0;
const POINT_RADIUS: f64 = 3.0;

// ── Bar chart geometry ──────────────────────────────────────────────
const BAR_HEIGHT: f64 = 20.0;
const BAR_GAP: f64 = 10.0;
const BAR_MAX_WIDTH: f64 = 300.0;
const BAR_X_PADDING: f64 = 10.0;
/// Logical width leaving a label column right of the bars.
const BAR_CANVAS_WIDTH: f64 = 500.0;

// ── Styling ─────────────────────────────────────────────────────────
const GRID_STROKE: &str = "#444444";
const GRID_STROKE_WIDTH: f64 = 0.5;
const SERIES_STROKE: &str = "#3a7bd5";
const SERIES_STROKE_WIDTH: f64 = 1.0;
const BAR_FILL: &str = "#d47264";
const LABEL_FILL: &str = "black";
const AXIS_FONT_SIZE: f64 = 10.0;
const BAR_FONT_SIZE: f64 = 16.0;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lays out shaped view-models as drawable primitives.
///
/// Pure pixel arithmetic — no fetching, no DOM, no state. Each call maps a
/// view-model plus the fixed canvas constraints to a fresh primitive list.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// The "(Jan 01 2024 - Mar 15 2024)" span label displayed next to the
    /// progress chart. Uses the raw (unsnapped) series endpoints.
    #[must_use]
    pub fn date_range_label(&self, series: &[CumulativePoint]) -> Option<String> {
        let first = series.first()?;
        let last = series.last()?;
        Some(format!(
            "({} - {})",
            first.at.format("%b %d %Y"),
            last.at.format("%b %d %Y"),
        ))
    }

    /// Lay out the cumulative XP line chart on the 800×400 canvas.
    ///
    /// `total_xp` comes from the server-side aggregate and drives the value
    /// scale; the series drives the time scale. Hover labels are the
    /// transaction paths with `campus_prefix` stripped. An empty series
    /// yields an empty canvas (nothing to anchor a time axis on).
    #[must_use]
    pub fn line_chart(
        &self,
        series: &[CumulativePoint],
        total_xp: i64,
        campus_prefix: &str,
    ) -> Chart {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Chart::empty(GRAPH_WIDTH, GRAPH_HEIGHT);
        };

        let day_diff = day_span(first.at, last.at);
        let (window_start, window_end) = snap_window(first.at, last.at, day_diff);

        // Two independent linear scales; y is inverted (chart origin at
        // the bottom). A zero aggregate pins the series to the baseline
        // instead of dividing by zero.
        let total_kb = if total_xp > 0 {
            total_xp as f64 / 1000.0
        } else {
            1.0
        };
        let span_ms = (window_end - window_start).num_milliseconds() as f64;
        let x_scale = (GRAPH_WIDTH - 2.0 * X_PADDING) / span_ms;
        let y_scale = (GRAPH_HEIGHT - 2.0 * Y_PADDING) / total_kb;

        let grid = self.grid_spec(window_start, window_end, day_diff, total_xp);

        let mut primitives = Vec::new();

        for tick in &grid.value_ticks {
            primitives.push(Primitive::Line {
                x1: X_PADDING,
                y1: tick.at,
                x2: GRAPH_WIDTH - X_PADDING,
                y2: tick.at,
                stroke: GRID_STROKE.to_string(),
                stroke_width: GRID_STROKE_WIDTH,
            });
            if let Some(label) = &tick.label {
                primitives.push(Primitive::Text {
                    x: 0.0,
                    y: tick.at + 3.0,
                    content: label.clone(),
                    font_size: AXIS_FONT_SIZE,
                    fill: LABEL_FILL.to_string(),
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Auto,
                });
            }
        }

        for tick in &grid.time_ticks {
            primitives.push(Primitive::Line {
                x1: tick.at,
                y1: Y_PADDING,
                x2: tick.at,
                y2: GRAPH_HEIGHT - Y_PADDING,
                stroke: GRID_STROKE.to_string(),
                stroke_width: GRID_STROKE_WIDTH,
            });
            if let Some(label) = &tick.label {
                primitives.push(Primitive::Text {
                    x: tick.at,
                    y: GRAPH_HEIGHT - Y_PADDING + 15.0,
                    content: label.clone(),
                    font_size: AXIS_FONT_SIZE,
                    fill: LABEL_FILL.to_string(),
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Auto,
                });
            }
        }

        // Map the series into pixel space, then connect consecutive points
        // with discrete segments and mark each point with a hover circle.
        let points: Vec<(f64, f64, Option<String>)> = series
            .iter()
            .map(|p| {
                let x = (p.at - window_start).num_milliseconds() as f64 * x_scale + X_PADDING;
                let y = (GRAPH_HEIGHT - Y_PADDING) - (p.cumulative as f64 / 1000.0) * y_scale;
                let label = p.path.as_ref().map(|s| s.replacen(campus_prefix, "", 1));
                (x, y, label)
            })
            .collect();

        for pair in points.windows(2) {
            primitives.push(Primitive::Line {
                x1: pair[0].0,
                y1: pair[0].1,
                x2: pair[1].0,
                y2: pair[1].1,
                stroke: SERIES_STROKE.to_string(),
                stroke_width: SERIES_STROKE_WIDTH,
            });
        }

        for (x, y, label) in points {
            primitives.push(Primitive::Circle {
                cx: x,
                cy: y,
                r: POINT_RADIUS,
                fill: SERIES_STROKE.to_string(),
                tooltip: label,
            });
        }

        Chart {
            width: GRAPH_WIDTH,
            height: GRAPH_HEIGHT,
            primitives,
        }
    }

    /// Compute axis ticks for the line chart.
    ///
    /// Value ticks step by `round(total_xp / 100_000) × 10` kB (floor 10).
    /// Time ticks are one per day for spans of a month or less, one per
    /// month above that, and one per quarter once the window reaches twelve
    /// months (the window end is stretched until the month count divides by
    /// three — that stretch affects tick spacing only, not the point scale).
    #[must_use]
    pub fn grid_spec(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        day_diff: i64,
        total_xp: i64,
    ) -> GridSpec {
        let total_kb = if total_xp > 0 {
            total_xp as f64 / 1000.0
        } else {
            1.0
        };
        let y_scale = (GRAPH_HEIGHT - 2.0 * Y_PADDING) / total_kb;

        let mut increment_kb = (total_xp as f64 / 100_000.0).round() * 10.0;
        if increment_kb == 0.0 {
            increment_kb = 10.0;
        }

        let step = increment_kb * y_scale;
        let line_span = GRAPH_HEIGHT / step;
        let mut value_ticks = Vec::new();
        let mut i: usize = 0;
        while (i as f64) < line_span {
            value_ticks.push(Tick {
                at: GRAPH_HEIGHT - Y_PADDING - i as f64 * step,
                label: Some(format!("{} kB", (i as f64 * increment_kb) as i64)),
            });
            i += 1;
        }

        let monthly = day_diff > 30;
        let mut months = months_between(window_start.date_naive(), window_end.date_naive());
        let mut quarterly = false;
        if monthly && months >= 12 {
            quarterly = true;
            while months % 3 != 0 {
                months += 1;
            }
            months /= 3;
        }
        let bucket_count = if monthly { months.max(1) } else { day_diff };

        let step_x = (GRAPH_WIDTH - 2.0 * X_PADDING) / bucket_count as f64;
        let mut time_ticks = Vec::new();

        let mut month0 = window_start.month0() as i64;
        let mut yy = window_start.year().rem_euclid(100);
        let start_day = window_start.day() as i64;
        let max_day = days_in_month(window_start.year(), window_start.month()) as i64;

        for i in 0..=bucket_count {
            if month0 >= 12 {
                month0 -= 12;
                yy += 1;
            }
            let x = i as f64 * step_x + X_PADDING;

            // The rightmost boundary line closes the grid without a label.
            let label = if i < bucket_count {
                if monthly {
                    let text = format!("{} {:02}", MONTH_ABBREV[month0 as usize], yy);
                    month0 += if quarterly { 3 } else { 1 };
                    Some(text)
                } else {
                    let day = start_day + i;
                    let wrapped = if day > max_day { day - max_day } else { day };
                    Some(wrapped.to_string())
                }
            } else {
                None
            };

            time_ticks.push(Tick { at: x, label });
        }

        GridSpec {
            value_ticks,
            time_ticks,
        }
    }

    /// Lay out a ranked bar chart (project XP or audit totals).
    ///
    /// The caller supplies the ordering. The longest bar spans exactly
    /// `BAR_MAX_WIDTH`; everything else scales linearly against the set
    /// maximum. An empty set has no maximum — zero bars, zero height.
    #[must_use]
    pub fn bar_chart(&self, items: &[ProjectTotal]) -> Chart {
        if items.is_empty() {
            return Chart::empty(BAR_CANVAS_WIDTH, 0.0);
        }

        let max = items.iter().map(|i| i.amount).max().unwrap_or(0).max(1);
        let mut primitives = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let y = (index + 1) as f64 * (BAR_HEIGHT + BAR_GAP);
            let length = item.amount as f64 / max as f64 * BAR_MAX_WIDTH;

            primitives.push(Primitive::Rect {
                x: BAR_X_PADDING,
                y,
                width: length,
                height: BAR_HEIGHT,
                fill: BAR_FILL.to_string(),
            });
            primitives.push(Primitive::Text {
                x: BAR_MAX_WIDTH + BAR_X_PADDING + 10.0,
                y: y + BAR_HEIGHT / 2.0,
                content: item.label.clone(),
                font_size: BAR_FONT_SIZE,
                fill: LABEL_FILL.to_string(),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
            });
            primitives.push(Primitive::Text {
                x: BAR_X_PADDING + 5.0,
                y: y + BAR_HEIGHT / 2.0,
                content: format_amount(item.amount as f64, true),
                font_size: BAR_FONT_SIZE,
                fill: LABEL_FILL.to_string(),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
            });
        }

        Chart {
            width: BAR_CANVAS_WIDTH,
            height: (BAR_HEIGHT + BAR_GAP) * (items.len() + 1) as f64,
            primitives,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Window arithmetic ───────────────────────────────────────────────

/// Whole days between the endpoints, rounded up, never below one.
fn day_span(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> i64 {
    let days = ((latest - earliest).num_seconds() as f64 / 86_400.0).ceil() as i64;
    days.max(1)
}

/// Snap the chart window around the data span.
///
/// Spans over 30 days snap to first-of-month boundaries (start back,
/// end forward). Shorter spans run from the first point's midnight to
/// the midnight after the last point.
fn snap_window(
    earliest: DateTime<Utc>,
    latest: DateTime<Utc>,
    day_diff: i64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    if day_diff > 30 {
        let start = at_midnight(month_start(earliest.date_naive()));
        let end_date = latest.date_naive();
        let end = if end_date.day() == 1 && is_midnight(latest) {
            latest
        } else {
            at_midnight(next_month_start(end_date))
        };
        (start, end)
    } else {
        let start = at_midnight(earliest.date_naive());
        let end = at_midnight(next_day(latest.date_naive()));
        (start, end)
    }
}

fn is_midnight(t: DateTime<Utc>) -> bool {
    t.time() == NaiveTime::MIN
}

fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Calendar months from `start` to `end` (month index difference).
fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    i64::from(end.month0()) - i64::from(start.month0())
        + 12 * (i64::from(end.year()) - i64::from(start.year()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
