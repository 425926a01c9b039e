//! Geocentric position of the Moon.
//!
//! Periodic terms of the ELP-2000/82 theory as abridged by Meeus, chapter 47.
//! Each term is a set of integer multipliers of the fundamental arguments
//! `D, M, M', F` and a coefficient in 1e-6 degrees (longitude, latitude) or
//! 1e-3 km (distance).

use crate::ephemeris::types::{normalize_degrees, EclipticPosition};
use crate::time::julian_centuries;

/// Mean Earth-Moon distance in km
const MEAN_DISTANCE_KM: f64 = 385_000.56;
const TRUNCATED_LONGITUDE_TERMS: usize = 6;
const TRUNCATED_LATITUDE_TERMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LunarTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coefficient: i32,
}

const fn t(d: i8, m: i8, mp: i8, f: i8, coefficient: i32) -> LunarTerm {
    LunarTerm { d, m, mp, f, coefficient }
}

/// Fundamental arguments at one instant, in degrees.
#[derive(Debug, Clone, Copy)]
struct Arguments {
    /// Mean longitude of the Moon
    l_prime: f64,
    /// Mean elongation
    d: f64,
    /// Sun's mean anomaly
    m: f64,
    /// Moon's mean anomaly
    m_prime: f64,
    /// Argument of latitude
    f: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    /// Eccentricity factor of the Earth's orbit
    e: f64,
}

impl Arguments {
    fn at(jd: f64) -> Self {
        let t = julian_centuries(jd);
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        Self {
            l_prime: 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m: 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
            m_prime: 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            a1: 119.75 + 131.849 * t,
            a2: 53.09 + 479_264.290 * t,
            a3: 313.45 + 481_266.484 * t,
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }

    fn argument(&self, term: &LunarTerm) -> f64 {
        (term.d as f64 * self.d
            + term.m as f64 * self.m
            + term.mp as f64 * self.m_prime
            + term.f as f64 * self.f)
            .to_radians()
    }

    /// Coefficient scaled by E^|m|
    fn weight(&self, term: &LunarTerm) -> f64 {
        term.coefficient as f64 * self.e.powi(term.m.unsigned_abs() as i32)
    }

    fn sine_sum(&self, terms: &[LunarTerm]) -> f64 {
        terms
            .iter()
            .map(|term| self.weight(term) * self.argument(term).sin())
            .sum()
    }

    fn cosine_sum(&self, terms: &[LunarTerm]) -> f64 {
        terms
            .iter()
            .map(|term| self.weight(term) * self.argument(term).cos())
            .sum()
    }
}

/// Additive longitude terms (Venus, Jupiter and Earth flattening).
fn longitude_additive(args: &Arguments) -> f64 {
    let a1 = args.a1.to_radians();
    let a2 = args.a2.to_radians();
    let l_minus_f = (args.l_prime - args.f).to_radians();
    3958.0 * a1.sin() + 1962.0 * l_minus_f.sin() + 318.0 * a2.sin()
}

fn latitude_additive(args: &Arguments) -> f64 {
    let l = args.l_prime.to_radians();
    let mp = args.m_prime.to_radians();
    let f = args.f.to_radians();
    let a1 = args.a1.to_radians();
    let a3 = args.a3.to_radians();
    -2235.0 * l.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (l - mp).sin()
        - 115.0 * (l + mp).sin()
}

/// Geocentric Moon from the full term tables. Distance is in km.
pub fn almanac_position(jd: f64) -> EclipticPosition {
    let args = Arguments::at(jd);

    let sum_l = args.sine_sum(&LONGITUDE_TERMS) + longitude_additive(&args);
    let sum_b = args.sine_sum(&LATITUDE_TERMS) + latitude_additive(&args);
    let sum_r = args.cosine_sum(&DISTANCE_TERMS);

    EclipticPosition {
        longitude: normalize_degrees(args.l_prime + sum_l / 1e6),
        latitude: sum_b / 1e6,
        distance: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

/// Geocentric Moon from the largest longitude and latitude terms only.
pub fn truncated_position(jd: f64) -> EclipticPosition {
    let args = Arguments::at(jd);

    let sum_l = args.sine_sum(&LONGITUDE_TERMS[..TRUNCATED_LONGITUDE_TERMS]);
    let sum_b = args.sine_sum(&LATITUDE_TERMS[..TRUNCATED_LATITUDE_TERMS]);
    let sum_r = args.cosine_sum(&DISTANCE_TERMS);

    EclipticPosition {
        longitude: normalize_degrees(args.l_prime + sum_l / 1e6),
        latitude: sum_b / 1e6,
        distance: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

pub(crate) const LONGITUDE_TERMS: [LunarTerm; 59] = [
    t(0, 0, 1, 0, 6288774),
    t(2, 0, -1, 0, 1274027),
    t(2, 0, 0, 0, 658314),
    t(0, 0, 2, 0, 213618),
    t(0, 1, 0, 0, -185116),
    t(0, 0, 0, 2, -114332),
    t(2, 0, -2, 0, 58793),
    t(2, -1, -1, 0, 57066),
    t(2, 0, 1, 0, 53322),
    t(2, -1, 0, 0, 45758),
    t(0, 1, -1, 0, -40923),
    t(1, 0, 0, 0, -34720),
    t(0, 1, 1, 0, -30383),
    t(2, 0, 0, -2, 15327),
    t(0, 0, 1, 2, -12528),
    t(0, 0, 1, -2, 10980),
    t(4, 0, -1, 0, 10675),
    t(0, 0, 3, 0, 10034),
    t(4, 0, -2, 0, 8548),
    t(2, 1, -1, 0, -7888),
    t(2, 1, 0, 0, -6766),
    t(1, 0, -1, 0, -5163),
    t(1, 1, 0, 0, 4987),
    t(2, -1, 1, 0, 4036),
    t(2, 0, 2, 0, 3994),
    t(4, 0, 0, 0, 3861),
    t(2, 0, -3, 0, 3665),
    t(0, 1, -2, 0, -2689),
    t(2, 0, -1, 2, -2602),
    t(2, -1, -2, 0, 2390),
    t(1, 0, 1, 0, -2348),
    t(2, -2, 0, 0, 2236),
    t(0, 1, 2, 0, -2120),
    t(0, 2, 0, 0, -2069),
    t(2, -2, -1, 0, 2048),
    t(2, 0, 1, -2, -1773),
    t(2, 0, 0, 2, -1595),
    t(4, -1, -1, 0, 1215),
    t(0, 0, 2, 2, -1110),
    t(3, 0, -1, 0, -892),
    t(2, 1, 1, 0, -810),
    t(4, -1, -2, 0, 759),
    t(0, 2, -1, 0, -713),
    t(2, 2, -1, 0, -700),
    t(2, 1, -2, 0, 691),
    t(2, -1, 0, -2, 596),
    t(4, 0, 1, 0, 549),
    t(0, 0, 4, 0, 537),
    t(4, -1, 0, 0, 520),
    t(1, 0, -2, 0, -487),
    t(2, 1, 0, -2, -399),
    t(0, 0, 2, -2, -381),
    t(1, 1, 1, 0, 351),
    t(3, 0, -2, 0, -340),
    t(4, 0, -3, 0, 330),
    t(2, -1, 2, 0, 327),
    t(0, 2, 1, 0, -323),
    t(1, 1, -1, 0, 299),
    t(2, 0, 3, 0, 294),
];

pub(crate) const LATITUDE_TERMS: [LunarTerm; 30] = [
    t(0, 0, 0, 1, 5128122),
    t(0, 0, 1, 1, 280602),
    t(0, 0, 1, -1, 277693),
    t(2, 0, 0, -1, 173237),
    t(2, 0, -1, 1, 55413),
    t(2, 0, -1, -1, 46271),
    t(2, 0, 0, 1, 32573),
    t(0, 0, 2, 1, 17198),
    t(2, 0, 1, -1, 9266),
    t(0, 0, 2, -1, 8822),
    t(2, -1, 0, -1, 8216),
    t(2, 0, -2, -1, 4324),
    t(2, 0, 1, 1, 4200),
    t(2, 1, 0, -1, -3359),
    t(2, -1, -1, 1, 2463),
    t(2, -1, 0, 1, 2211),
    t(2, -1, -1, -1, 2065),
    t(0, 1, -1, -1, -1870),
    t(4, 0, -1, -1, 1828),
    t(0, 1, 0, 1, -1794),
    t(0, 0, 0, 3, -1749),
    t(0, 1, -1, 1, -1565),
    t(1, 0, 0, 1, -1491),
    t(0, 1, 1, 1, -1475),
    t(0, 1, 1, -1, -1410),
    t(0, 1, 0, -1, -1344),
    t(1, 0, 0, -1, -1335),
    t(0, 0, 3, 1, 1107),
    t(4, 0, 0, -1, 1021),
    t(4, 0, -1, 1, 833),
];

pub(crate) const DISTANCE_TERMS: [LunarTerm; 31] = [
    t(0, 0, 1, 0, -20905355),
    t(2, 0, -1, 0, -3699111),
    t(2, 0, 0, 0, -2955968),
    t(0, 0, 2, 0, -569925),
    t(0, 1, 0, 0, 48888),
    t(0, 0, 0, 2, -3149),
    t(2, 0, -2, 0, 246158),
    t(2, -1, -1, 0, -152138),
    t(2, 0, 1, 0, -170733),
    t(2, -1, 0, 0, -204586),
    t(0, 1, -1, 0, -129620),
    t(1, 0, 0, 0, 108743),
    t(0, 1, 1, 0, 104755),
    t(2, 0, 0, -2, 10321),
    t(0, 0, 1, -2, 79661),
    t(4, 0, -1, 0, -34782),
    t(0, 0, 3, 0, -23210),
    t(4, 0, -2, 0, -21636),
    t(2, 1, -1, 0, 24208),
    t(2, 1, 0, 0, 30824),
    t(1, 0, -1, 0, -8379),
    t(1, 1, 0, 0, -16675),
    t(2, -1, 1, 0, -12831),
    t(2, 0, 2, 0, -10445),
    t(4, 0, 0, 0, -11650),
    t(2, 0, -3, 0, 14403),
    t(0, 1, -2, 0, -7003),
    t(2, -1, -2, 0, 10056),
    t(1, 0, 1, 0, 6322),
    t(2, -2, 0, 0, -9884),
    t(0, 1, 2, 0, 5751),
];
