//! Contracts for services the core consumes but does not provide.

use crate::chart::ChartReport;
use crate::compatibility::CompatibilityResult;
use crate::ephemeris::GeoLocation;

/// Resolves a place name to coordinates and the UTC offset in force there.
pub trait LocationResolver {
    type Error: std::error::Error;

    /// `Ok(None)` when the place is unknown.
    fn resolve(&self, place: &str) -> Result<Option<ResolvedPlace>, Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub name: String,
    pub location: GeoLocation,
    /// Minutes east of UTC
    pub utc_offset_minutes: i32,
}

/// Writes prose from structured chart data. The core never calls this itself.
pub trait NarrativeWriter {
    type Error: std::error::Error;

    fn chart_summary(&self, report: &ChartReport) -> Result<String, Self::Error>;

    fn compatibility_summary(&self, result: &CompatibilityResult) -> Result<String, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::convert::Infallible;

    struct Gazetteer(BTreeMap<&'static str, (f64, f64, i32)>);

    impl LocationResolver for Gazetteer {
        type Error = Infallible;

        fn resolve(&self, place: &str) -> Result<Option<ResolvedPlace>, Infallible> {
            Ok(self.0.get(place).map(|&(lat, lon, offset)| ResolvedPlace {
                name: place.to_string(),
                location: GeoLocation { lat, lon },
                utc_offset_minutes: offset,
            }))
        }
    }

    #[test]
    fn test_resolver_contract() {
        let gazetteer = Gazetteer(BTreeMap::from([("Taipei", (25.03, 121.56, 480))]));
        let taipei = gazetteer.resolve("Taipei").unwrap().unwrap();
        assert_eq!(taipei.utc_offset_minutes, 480);
        assert!(gazetteer.resolve("Atlantis").unwrap().is_none());
    }
}
