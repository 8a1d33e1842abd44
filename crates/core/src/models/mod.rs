pub mod chart;
pub mod series;
pub mod timeframe;
