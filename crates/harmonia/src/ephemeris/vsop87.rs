//! VSOP87 periodic terms for the heliocentric position of the Earth.
//!
//! Truncated tables from Meeus, "Astronomical Algorithms", Appendix III.
//! Longitude and latitude terms are in units of 1e-8 radian, radius terms
//! in units of 1e-8 AU. The time argument is Julian millennia from J2000.0.

#![allow(clippy::unreadable_literal)]

use crate::ephemeris::series::PeriodicTerm;

const fn t(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
    PeriodicTerm::new(amplitude, phase, frequency)
}

pub const EARTH_L0: [PeriodicTerm; 64] = [
    t(175347046.0, 0.0, 0.0),
    t(3341656.0, 4.6692568, 6283.0758500),
    t(34894.0, 4.62610, 12566.15170),
    t(3497.0, 2.7441, 5753.3849),
    t(3418.0, 2.8289, 3.5231),
    t(3136.0, 3.6277, 77713.7715),
    t(2676.0, 4.4181, 7860.4194),
    t(2343.0, 6.1352, 3930.2097),
    t(1324.0, 0.7425, 11506.7698),
    t(1273.0, 2.0371, 529.6910),
    t(1199.0, 1.1096, 1577.3435),
    t(990.0, 5.233, 5884.927),
    t(902.0, 2.045, 26.298),
    t(857.0, 3.508, 398.149),
    t(780.0, 1.179, 5223.694),
    t(753.0, 2.533, 5507.553),
    t(505.0, 4.583, 18849.228),
    t(492.0, 4.205, 775.523),
    t(357.0, 2.920, 0.067),
    t(317.0, 5.849, 11790.629),
    t(284.0, 1.899, 796.298),
    t(271.0, 0.315, 10977.079),
    t(243.0, 0.345, 5486.778),
    t(206.0, 4.806, 2544.314),
    t(205.0, 1.869, 5573.143),
    t(202.0, 2.458, 6069.777),
    t(156.0, 0.833, 213.299),
    t(132.0, 3.411, 2942.463),
    t(126.0, 1.083, 20.775),
    t(115.0, 0.645, 0.980),
    t(103.0, 0.636, 4694.003),
    t(102.0, 0.976, 15720.839),
    t(102.0, 4.267, 7.114),
    t(99.0, 6.21, 2146.17),
    t(98.0, 0.68, 155.42),
    t(86.0, 5.98, 161000.69),
    t(85.0, 1.30, 6275.96),
    t(85.0, 3.67, 71430.70),
    t(80.0, 1.81, 17260.15),
    t(79.0, 3.04, 12036.46),
    t(75.0, 1.76, 5088.63),
    t(74.0, 3.50, 3154.69),
    t(74.0, 4.68, 801.82),
    t(70.0, 0.83, 9437.76),
    t(62.0, 3.98, 8827.39),
    t(61.0, 1.82, 7084.90),
    t(57.0, 2.78, 6286.60),
    t(56.0, 4.39, 14143.50),
    t(56.0, 3.47, 6279.55),
    t(52.0, 0.19, 12139.55),
    t(52.0, 1.33, 1748.02),
    t(51.0, 0.28, 5856.48),
    t(49.0, 0.49, 1194.45),
    t(41.0, 5.37, 8429.24),
    t(41.0, 2.40, 19651.05),
    t(39.0, 6.17, 10447.39),
    t(37.0, 6.04, 10213.29),
    t(37.0, 2.57, 1059.38),
    t(36.0, 1.71, 2352.87),
    t(36.0, 1.78, 6812.77),
    t(33.0, 0.59, 17789.85),
    t(30.0, 0.44, 83996.85),
    t(30.0, 2.74, 1349.87),
    t(25.0, 3.16, 4690.48),
];

pub const EARTH_L1: [PeriodicTerm; 34] = [
    t(628331966747.0, 0.0, 0.0),
    t(206059.0, 2.678235, 6283.075850),
    t(4303.0, 2.6351, 12566.1517),
    t(425.0, 1.590, 3.523),
    t(119.0, 5.796, 26.298),
    t(109.0, 2.966, 1577.344),
    t(93.0, 2.59, 18849.23),
    t(72.0, 1.14, 529.69),
    t(68.0, 1.87, 398.15),
    t(67.0, 4.41, 5507.55),
    t(59.0, 2.89, 5223.69),
    t(56.0, 2.17, 155.42),
    t(45.0, 0.40, 796.30),
    t(36.0, 0.47, 775.52),
    t(29.0, 2.65, 7.11),
    t(21.0, 5.34, 0.98),
    t(19.0, 1.85, 5486.78),
    t(19.0, 4.97, 213.30),
    t(17.0, 2.99, 6275.96),
    t(16.0, 0.03, 2544.31),
    t(16.0, 1.43, 2146.17),
    t(15.0, 1.21, 10977.08),
    t(12.0, 2.83, 1748.02),
    t(12.0, 3.26, 5088.63),
    t(12.0, 5.27, 1194.45),
    t(12.0, 2.08, 4694.00),
    t(11.0, 0.77, 553.57),
    t(10.0, 1.30, 6286.60),
    t(10.0, 4.24, 1349.87),
    t(9.0, 2.70, 242.73),
    t(9.0, 5.64, 951.72),
    t(8.0, 5.30, 2352.87),
    t(6.0, 2.65, 9437.76),
    t(6.0, 4.67, 4690.48),
];

pub const EARTH_L2: [PeriodicTerm; 20] = [
    t(52919.0, 0.0, 0.0),
    t(8720.0, 1.0721, 6283.0758),
    t(309.0, 0.867, 12566.152),
    t(27.0, 0.05, 3.52),
    t(16.0, 5.19, 26.30),
    t(16.0, 3.68, 155.42),
    t(10.0, 0.76, 18849.23),
    t(9.0, 2.06, 77713.77),
    t(7.0, 0.83, 775.52),
    t(5.0, 4.66, 1577.34),
    t(4.0, 1.03, 7.11),
    t(4.0, 3.44, 5573.14),
    t(3.0, 5.14, 796.30),
    t(3.0, 6.05, 5507.55),
    t(3.0, 1.19, 242.73),
    t(3.0, 6.12, 529.69),
    t(3.0, 0.31, 398.15),
    t(3.0, 2.28, 553.57),
    t(2.0, 4.38, 5223.69),
    t(2.0, 3.75, 0.98),
];

pub const EARTH_L3: [PeriodicTerm; 7] = [
    t(289.0, 5.844, 6283.076),
    t(35.0, 0.0, 0.0),
    t(17.0, 5.49, 12566.15),
    t(3.0, 5.20, 155.42),
    t(1.0, 4.72, 3.52),
    t(1.0, 5.30, 18849.23),
    t(1.0, 5.97, 242.73),
];

pub const EARTH_L4: [PeriodicTerm; 3] = [
    t(114.0, 3.142, 0.0),
    t(8.0, 4.13, 6283.08),
    t(1.0, 3.84, 12566.15),
];

pub const EARTH_B0: [PeriodicTerm; 5] = [
    t(280.0, 3.199, 84334.662),
    t(102.0, 5.422, 5507.553),
    t(80.0, 3.88, 5223.69),
    t(44.0, 3.70, 2352.87),
    t(32.0, 4.00, 1577.34),
];

pub const EARTH_B1: [PeriodicTerm; 2] = [
    t(9.0, 3.90, 5507.55),
    t(6.0, 1.73, 5223.69),
];

pub const EARTH_R0: [PeriodicTerm; 40] = [
    t(100013989.0, 0.0, 0.0),
    t(1670700.0, 3.0984635, 6283.0758500),
    t(13956.0, 3.05525, 12566.15170),
    t(3084.0, 5.1985, 77713.7715),
    t(1628.0, 1.1739, 5753.3849),
    t(1576.0, 2.8469, 7860.4194),
    t(925.0, 5.453, 11506.770),
    t(542.0, 4.564, 3930.210),
    t(472.0, 3.661, 5884.927),
    t(346.0, 0.964, 5507.553),
    t(329.0, 5.900, 5223.694),
    t(307.0, 0.299, 5573.143),
    t(243.0, 4.273, 11790.629),
    t(212.0, 5.847, 1577.344),
    t(186.0, 5.022, 10977.079),
    t(175.0, 3.012, 18849.228),
    t(110.0, 5.055, 5486.778),
    t(98.0, 0.89, 6069.78),
    t(86.0, 5.69, 15720.84),
    t(86.0, 1.27, 161000.69),
    t(65.0, 0.27, 17260.15),
    t(63.0, 0.92, 529.69),
    t(57.0, 2.01, 83996.85),
    t(56.0, 5.24, 71430.70),
    t(49.0, 3.25, 2544.31),
    t(47.0, 2.58, 775.52),
    t(45.0, 5.54, 9437.76),
    t(43.0, 6.01, 6275.96),
    t(39.0, 5.36, 4694.00),
    t(38.0, 2.39, 8827.39),
    t(37.0, 0.83, 19651.05),
    t(37.0, 4.90, 12139.55),
    t(36.0, 1.67, 12036.46),
    t(35.0, 1.84, 2942.46),
    t(33.0, 0.24, 7084.90),
    t(32.0, 0.18, 5088.63),
    t(32.0, 1.78, 398.15),
    t(28.0, 1.21, 6286.60),
    t(28.0, 1.90, 6279.55),
    t(26.0, 4.59, 10447.39),
];

pub const EARTH_R1: [PeriodicTerm; 10] = [
    t(103019.0, 1.107490, 6283.075850),
    t(1721.0, 1.0644, 12566.1517),
    t(702.0, 3.142, 0.0),
    t(32.0, 1.02, 18849.23),
    t(31.0, 2.84, 5507.55),
    t(25.0, 1.32, 5223.69),
    t(18.0, 1.42, 1577.34),
    t(10.0, 5.91, 10977.08),
    t(9.0, 1.42, 6275.96),
    t(9.0, 0.27, 5486.78),
];

pub const EARTH_R2: [PeriodicTerm; 6] = [
    t(4359.0, 5.7846, 6283.0758),
    t(124.0, 5.579, 12566.152),
    t(12.0, 3.14, 0.0),
    t(9.0, 3.63, 77713.77),
    t(6.0, 1.87, 5573.14),
    t(3.0, 5.47, 18849.23),
];
