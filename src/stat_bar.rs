use crate::state::PlayerStatLine;

pub const RUNS_CEILING: f64 = 20_000.0;
pub const WICKETS_CEILING: f64 = 800.0;
pub const AVERAGE_CEILING: f64 = 100.0;
pub const STRIKE_RATE_CEILING: f64 = 200.0;
pub const ECONOMY_CEILING: f64 = 10.0;

const FLOOR_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Runs,
    Wickets,
    Average,
    StrikeRate,
    Economy,
}

impl StatKind {
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Runs => "Runs",
            StatKind::Wickets => "Wickets",
            StatKind::Average => "Average",
            StatKind::StrikeRate => "Strike rate",
            StatKind::Economy => "Economy",
        }
    }

    pub fn ceiling(self) -> f64 {
        match self {
            StatKind::Runs => RUNS_CEILING,
            StatKind::Wickets => WICKETS_CEILING,
            StatKind::Average => AVERAGE_CEILING,
            StatKind::StrikeRate => STRIKE_RATE_CEILING,
            StatKind::Economy => ECONOMY_CEILING,
        }
    }
}

/// Bar fill for a figure: `value / max` as a percentage, held within [5, 100].
pub fn stat_bar_percent(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return FLOOR_PERCENT;
    }
    ((value / max) * 100.0).clamp(FLOOR_PERCENT, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub kind: StatKind,
    pub value: String,
    pub percent: f64,
}

/// Bars shown for one format: runs and wickets when present, average always.
pub fn stat_bars(line: &PlayerStatLine) -> Vec<StatBar> {
    let mut bars = Vec::with_capacity(5);
    if let Some(runs) = line.runs {
        bars.push(bar(StatKind::Runs, runs.to_string(), runs as f64));
    }
    if let Some(wickets) = line.wickets {
        bars.push(bar(StatKind::Wickets, wickets.to_string(), wickets as f64));
    }
    bars.push(bar(StatKind::Average, format!("{:.2}", line.average), line.average));
    if let Some(sr) = line.strike_rate {
        bars.push(bar(StatKind::StrikeRate, format!("{sr:.1}"), sr));
    }
    if let Some(econ) = line.economy {
        bars.push(bar(StatKind::Economy, format!("{econ:.2}"), econ));
    }
    bars
}

fn bar(kind: StatKind, value: String, figure: f64) -> StatBar {
    StatBar {
        kind,
        value,
        percent: stat_bar_percent(figure, kind.ceiling()),
    }
}

/// Text bar `width` cells wide, filled in proportion to `percent`.
pub fn render_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n('█', filled));
    out.extend(std::iter::repeat_n('░', width - filled));
    out
}
