//! Chart rendering.
//!
//! [`TerminalChart`] draws price, both averages and the signal markers as a
//! character plot, so the tool works over SSH and in CI logs without a display.

use std::io::Write;

use crate::common::math;
use crate::error::Result;
use crate::models::analysis::CrossoverAnalysis;
use crate::models::signal::SignalKind;

const PRICE_GLYPH: char = '.';
const SHORT_GLYPH: char = 's';
const LONG_GLYPH: char = 'L';
const BUY_GLYPH: char = '^';
const SELL_GLYPH: char = 'v';

const LABEL_WIDTH: usize = 10;

pub trait ChartRenderer: Send + Sync {
    fn render(&self, analysis: &CrossoverAnalysis, out: &mut dyn Write) -> Result<()>;
}

/// Draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChart;

impl ChartRenderer for NoopChart {
    fn render(&self, _analysis: &CrossoverAnalysis, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalChart {
    width: usize,
    height: usize,
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self {
            width: 100,
            height: 24,
        }
    }
}

impl TerminalChart {
    /// Plot area size in characters; both dimensions are clamped to at least 2.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
        }
    }

    pub fn render_to_string(&self, analysis: &CrossoverAnalysis) -> String {
        let mut lines = vec![
            format!("{} - Moving Average Crossover Strategy", analysis.symbol),
            String::new(),
        ];

        let n = analysis.prices.len();
        let values = analysis
            .prices
            .iter()
            .map(|p| p.close)
            .chain(analysis.short_ma.points.iter().filter_map(|p| p.value))
            .chain(analysis.long_ma.points.iter().filter_map(|p| p.value));

        let Some((lo, hi)) = math::bounds(values) else {
            lines.push("(no data)".to_string());
            return lines.join("\n") + "\n";
        };
        let (lo, hi) = if hi - lo < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        };

        let columns = self.width.min(n);
        let column_of = |index: usize| index * columns / n;
        let row_of = |value: f64| {
            let scaled = (hi - value) / (hi - lo) * (self.height - 1) as f64;
            (scaled.round() as usize).min(self.height - 1)
        };

        let mut grid = vec![vec![' '; columns]; self.height];

        for (i, price) in analysis.prices.iter().enumerate() {
            grid[row_of(price.close)][column_of(i)] = PRICE_GLYPH;
        }
        for (series, glyph) in [(&analysis.long_ma, LONG_GLYPH), (&analysis.short_ma, SHORT_GLYPH)] {
            for (i, point) in series.points.iter().enumerate().take(n) {
                if let Some(value) = point.value {
                    grid[row_of(value)][column_of(i)] = glyph;
                }
            }
        }

        // Signal markers are placed last so they stay visible over the lines.
        for signal in &analysis.signals {
            let Ok(i) = analysis.prices.binary_search_by_key(&signal.date, |p| p.date) else {
                continue;
            };
            let glyph = match signal.kind {
                SignalKind::Buy => BUY_GLYPH,
                SignalKind::Sell => SELL_GLYPH,
            };
            grid[row_of(signal.price)][column_of(i)] = glyph;
        }

        let mid_row = (self.height - 1) / 2;
        for (r, row) in grid.iter().enumerate() {
            let label = if r == 0 || r == mid_row || r == self.height - 1 {
                let value = hi - (hi - lo) * r as f64 / (self.height - 1) as f64;
                format!("{:>width$.2}", value, width = LABEL_WIDTH)
            } else {
                " ".repeat(LABEL_WIDTH)
            };
            let body: String = row.iter().collect();
            lines.push(format!("{label} |{}", body.trim_end()));
        }
        lines.push(format!("{} +{}", " ".repeat(LABEL_WIDTH), "-".repeat(columns)));

        if let (Some(first), Some(last)) = (analysis.prices.first(), analysis.prices.last()) {
            let first = first.date.format("%Y-%m-%d").to_string();
            let last = last.date.format("%Y-%m-%d").to_string();
            let gap = columns.saturating_sub(first.len() + last.len()).max(1);
            lines.push(format!(
                "{}  {first}{}{last}",
                " ".repeat(LABEL_WIDTH),
                " ".repeat(gap)
            ));
        }

        lines.push(String::new());
        lines.push(format!("  {PRICE_GLYPH}  Stock Price"));
        lines.push(format!("  {SHORT_GLYPH}  {}-Day MA (Short)", analysis.short_ma.window));
        lines.push(format!("  {LONG_GLYPH}  {}-Day MA (Long)", analysis.long_ma.window));
        lines.push(format!("  {BUY_GLYPH}  Buy Signal"));
        lines.push(format!("  {SELL_GLYPH}  Sell Signal"));

        lines.join("\n") + "\n"
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&self, analysis: &CrossoverAnalysis, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.render_to_string(analysis).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
