pub mod calculator;
pub mod types;

pub use calculator::{separation, AspectCalculator};
pub use types::{Aspect, AspectCore, AspectKind, AspectSettings, ASPECT_TABLE};
