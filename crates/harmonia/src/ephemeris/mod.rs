pub mod adapter;
pub mod chiron;
pub mod houses;
pub mod model;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod series;
pub mod sun;
pub mod types;
mod vsop87;

pub use adapter::EphemerisAdapter;
pub use chiron::chiron_position;
pub use houses::{compute_houses, HouseMethod, HouseSystem};
pub use model::{motion, AccuracyTier, AlmanacModel, PositionModel, TruncatedModel};
pub use nodes::mean_lunar_nodes;
pub use planets::{solve_kepler, KeplerSolution, OrbitalElements};
pub use types::{
    Body, BodyMotion, ChartPositions, ChironPosition, EclipticPosition, GeoLocation, LunarNodes, PlanetPosition,
    ALL_BODIES,
};
