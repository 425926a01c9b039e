pub mod elements;
pub mod patterns;
pub mod signs;
pub mod types;

pub use elements::{element_tally, modality_tally, ElementTally, ModalityTally};
pub use patterns::{detect_patterns, Pattern, PatternKind};
pub use signs::{Element, Modality, Sign, SIGNS};
pub use types::ChartBody;
