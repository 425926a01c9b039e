use crate::ephemeris::types::{normalize_degrees, LunarNodes};
use crate::time::julian_centuries;

/// Mean lunar nodes. The south node is always opposite the north node.
pub fn mean_lunar_nodes(jd: f64) -> LunarNodes {
    let t = julian_centuries(jd);
    let omega = 125.0445479 - 1934.1362891 * t + 0.0020754 * t * t + t * t * t / 467_441.0;
    let north_node = normalize_degrees(omega);

    LunarNodes {
        north_node,
        south_node: normalize_degrees(north_node + 180.0),
    }
}
