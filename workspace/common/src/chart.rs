//! Line chart description for historical closing prices.
//!
//! The frontend hands the Plotly payloads produced here straight to
//! `Plotly.newPlot`, so everything that decides what the chart shows lives
//! in this module and can be checked without a browser.

use crate::{HistoricalData, Ticker};
use serde_json::{Value, json};

const LINE_COLOR: &str = "rgba(75, 192, 192, 1)";
const LINE_WIDTH: u32 = 1;

/// A single-dataset line chart of closing price against date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub label: String,
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub line_color: &'static str,
    pub line_width: u32,
    /// When false the y axis fits the data instead of starting at zero.
    pub begin_at_zero: bool,
}

impl PriceChart {
    /// Build the chart for `ticker`. Points keep the order the server sent.
    pub fn from_historical(ticker: &Ticker, data: HistoricalData) -> Self {
        if data.dates.len() != data.closing_prices.len() {
            log::warn!(
                "Historical data for {} has {} dates but {} prices",
                ticker,
                data.dates.len(),
                data.closing_prices.len()
            );
        }

        Self {
            label: format!("{} Closing Price", ticker),
            dates: data.dates,
            prices: data.closing_prices,
            line_color: LINE_COLOR,
            line_width: LINE_WIDTH,
            begin_at_zero: false,
        }
    }

    /// (date, price) pairs in chart order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.prices.iter().copied())
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    pub fn plotly_traces(&self) -> Value {
        json!([{
            "x": self.dates,
            "y": self.prices,
            "type": "scatter",
            "mode": "lines",
            "name": self.label,
            "fill": "none",
            "line": {"color": self.line_color, "width": self.line_width}
        }])
    }

    pub fn plotly_layout(&self) -> Value {
        let rangemode = if self.begin_at_zero { "tozero" } else { "normal" };

        json!({
            "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
            "xaxis": {"showgrid": false},
            "yaxis": {"showgrid": true, "gridcolor": "#eee", "rangemode": rangemode}
        })
    }

    pub fn plotly_config(&self) -> Value {
        json!({"responsive": true, "displayModeBar": false})
    }
}
