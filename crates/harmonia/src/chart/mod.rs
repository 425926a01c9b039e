//! Assembles the ephemeris, aspects, patterns and Bazi into complete charts.

pub mod birth;
pub mod natal;
pub mod settings;

pub use birth::BirthData;
pub use natal::{
    chart_bodies, compute_bazi_chart, compute_natal_chart, compute_report, ChartReport, NatalChart,
};
pub use settings::ChartSettings;
