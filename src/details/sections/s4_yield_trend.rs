//! S4: Past Yield Trends
//!
//! Summarises a crop's recorded yield series. Observations carry no dates,
//! so they are labelled by position ("obs 1", "obs 2", ...), never by year.
//! Units differ between crops and are not stated, so values are printed bare.

use serde::Serialize;

/// Absolute change (in percent) below which a series counts as steady.
const STEADY_THRESHOLD_PCT: f64 = 1.0;

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Rising,
    Falling,
    Steady,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "Rising",
            TrendDirection::Falling => "Falling",
            TrendDirection::Steady => "Steady",
        }
    }
}

/// Summary statistics over a yield series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldTrend {
    pub observations: usize,
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// `(last - first) / first * 100`; `None` when the first value is zero
    pub change_pct: Option<f64>,
    pub direction: TrendDirection,
}

impl YieldTrend {
    /// Summarise `yields`. Returns `None` for an empty series.
    pub fn from_yields(yields: &[f64]) -> Option<Self> {
        let (&first, &last) = (yields.first()?, yields.last()?);

        let min = yields.iter().copied().fold(f64::INFINITY, f64::min);
        let max = yields.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = yields.iter().sum::<f64>() / yields.len() as f64;

        let change_pct = if first == 0.0 {
            None
        } else {
            Some((last - first) / first * 100.0)
        };

        let direction = match change_pct {
            Some(pct) if pct >= STEADY_THRESHOLD_PCT => TrendDirection::Rising,
            Some(pct) if pct <= -STEADY_THRESHOLD_PCT => TrendDirection::Falling,
            Some(_) => TrendDirection::Steady,
            // Started from zero: any later growth is a rise
            None if last > first => TrendDirection::Rising,
            None if last < first => TrendDirection::Falling,
            None => TrendDirection::Steady,
        };

        Some(Self {
            observations: yields.len(),
            first,
            last,
            min,
            max,
            mean,
            change_pct,
            direction,
        })
    }
}

/// One block glyph per observation, scaled between the series min and max.
///
/// A flat series renders at mid height.
pub fn sparkline(yields: &[f64]) -> String {
    let min = yields.iter().copied().fold(f64::INFINITY, f64::min);
    let max = yields.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let top = (SPARK_GLYPHS.len() - 1) as f64;

    yields
        .iter()
        .map(|&y| {
            if range <= 0.0 {
                SPARK_GLYPHS[SPARK_GLYPHS.len() / 2 - 1]
            } else {
                let idx = ((y - min) / range * top).round() as usize;
                SPARK_GLYPHS[idx.min(SPARK_GLYPHS.len() - 1)]
            }
        })
        .collect()
}

/// Trim trailing zeros so 65.0 prints as "65" and 3.5 as "3.5".
pub fn format_yield(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Generate the S4 Past Yield Trends section.
pub fn generate(yields: &[f64]) -> String {
    let mut sections = Vec::new();
    sections.push("## Past Yield Trends".to_string());

    let trend = match YieldTrend::from_yields(yields) {
        Some(t) => t,
        None => {
            sections.push("\n*No yield history recorded for this crop.*".to_string());
            return sections.join("");
        }
    };

    sections.push(String::new());
    sections.push(format!("`{}`", sparkline(yields)));

    sections.push(String::new());
    sections.push("| Observation | Yield |".to_string());
    sections.push("|---|---|".to_string());
    for (i, y) in yields.iter().enumerate() {
        sections.push(format!("| obs {} | {} |", i + 1, format_yield(*y)));
    }

    sections.push(String::new());
    let change = match trend.change_pct {
        Some(pct) => format!(" ({:+.1}% from first to last)", pct),
        None => String::new(),
    };
    sections.push(format!("**Trend**: {}{}", trend.direction.label(), change));
    sections.push(format!(
        "**Range**: {} – {} (mean {}) over {} observations",
        format_yield(trend.min),
        format_yield(trend.max),
        format_yield(trend.mean),
        trend.observations
    ));

    sections.join("\n")
}
