pub mod predictor;
pub mod price_chart;
