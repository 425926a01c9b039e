//! Chinese Four Pillars (Bazi).

pub mod calendar;
pub mod cycles;
pub mod pillars;
pub mod ten_gods;
pub mod types;

pub use calendar::{chinese_new_year, solar_month_index};
pub use cycles::{EarthlyBranch, FiveElement, HeavenlyStem, Polarity};
pub use pillars::compute_bazi;
pub use ten_gods::{analyze, ten_god};
pub use types::{BaziAnalysis, BaziChart, FiveElementTally, Pillar, PillarPosition, TenGod, TenGodEntry};
