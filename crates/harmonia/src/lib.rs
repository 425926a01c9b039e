//! Western natal charts, Bazi four pillars and the harmony between them.
//!
//! Everything here is a pure function of its inputs: positions come from
//! analytical theories evaluated in-process, so no data files or network
//! access are needed.

pub mod aspects;
pub mod bazi;
pub mod chart;
pub mod collaborators;
pub mod compatibility;
pub mod ephemeris;
pub mod error;
pub mod harmony;
pub mod tally;
pub mod time;
pub mod western;

pub use chart::{
    compute_bazi_chart, compute_natal_chart, compute_report, BirthData, ChartReport, ChartSettings,
    NatalChart,
};
pub use compatibility::{compute_compatibility, CompatibilityResult};
pub use error::ChartError;
pub use time::Instant;
