// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T)
//!
//! Piecewise model for **ΔT = TT − UT** from chapter 10 of *Jean Meeus,
//! Astronomical Algorithms (2nd ed. 1998)*.  ΔT grows with the slowing of
//! the Earth's rotation and is needed to turn a historical date (kept in
//! UT) into dynamical time.
//!
//! | Years | Model |
//! |-------|-------|
//! | < 948 | Stephenson & Houlden quadratic |
//! | 948 – 1620 | Stephenson & Houlden second quadratic |
//! | 1620 – 1992 | interpolation in the biennial table |
//! | 1992 – 2010 | interpolation of the 1990/2000/2010 estimates |
//! | > 2010 | Meeus eq. 10.2 extrapolation |
//!
//! Day counts in this crate carry no time-scale physics, so ΔT is only ever
//! reported, never applied.
//!
//! ## Scientific References
//! * Stephenson & Houlden (1986): *Atlas of Historical Eclipse Maps*.
//! * Morrison & Stephenson (2004): "Historical values of the Earth's clock error".
//!
//! ## Valid Time Range
//! Typical uncertainties are ≤ ±2 s before 1800 CE and ≤ ±0.5 s since 1900;
//! the extrapolation drifts from observed values after about 2010.

use super::instant::Time;
use super::sampling::SampleGrid;
use super::scales::JD;
use super::JulianDay;
use qtty::{Days, Seconds, Simplify};
use tracing::debug;

/// Total number of tabulated terms (biennial 1620–1992).
const TERMS: usize = 187;

/// Biennial ΔT table from 1620 to 1992 (in seconds), compiled by J. Meeus.
#[rustfmt::skip]
const DELTA_T: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

// ------------------------------------------------------------------------------------
// ΔT Approximation Sections by Time Interval
// ------------------------------------------------------------------------------------

/// **Years < 948 CE**
/// Quadratic formula from Stephenson & Houlden (1986).
#[inline]
fn delta_t_ancient(jd: JulianDay) -> Seconds {
    const DT_A0_S: Seconds = Seconds::new(1_830.0);
    const DT_A1_S: Seconds = Seconds::new(-405.0);
    const DT_A2_S: Seconds = Seconds::new(46.5);
    const JD_EPOCH_948_UT: JulianDay = JulianDay::new(2_067_314.5);
    let c = days_ratio(jd - JD_EPOCH_948_UT, JulianDay::JULIAN_CENTURY);
    DT_A0_S + DT_A1_S * c + DT_A2_S * c * c
}

/// **Years 948–1620 CE**
/// Second polynomial from Stephenson & Houlden (1986).
#[inline]
fn delta_t_medieval(jd: JulianDay) -> Seconds {
    const JD_EPOCH_1850_UT: JulianDay = JulianDay::new(2_396_758.5);
    const DT_A2_S: Seconds = Seconds::new(22.5);

    let c = days_ratio(jd - JD_EPOCH_1850_UT, JulianDay::JULIAN_CENTURY);
    DT_A2_S * c * c
}

/// JD of 1620-01-01, the first entry of the biennial table.
const JD_TABLE_START_1620: JulianDay = JulianDay::new(2_312_752.5);

/// **Years 1620–1992**
/// Three-point interpolation (Meeus eq. 3.3) in the biennial `DELTA_T`
/// table, centred on the entry nearest to `jd`.
#[inline]
fn delta_t_table(jd: JulianDay) -> Seconds {
    const BIENNIAL_STEP_D: Days = Days::new(730.5);

    let nearest = days_ratio(jd - JD_TABLE_START_1620, BIENNIAL_STEP_D).round() as i64;
    let i = (nearest - 1).clamp(0, TERMS as i64 - 3) as usize;
    let a: Seconds = DELTA_T[i + 1] - DELTA_T[i];
    let b: Seconds = DELTA_T[i + 2] - DELTA_T[i + 1];
    let c: Seconds = b - a;
    let n = days_ratio(
        jd - (JD_TABLE_START_1620 + BIENNIAL_STEP_D * (i + 1) as f64),
        BIENNIAL_STEP_D,
    );
    DELTA_T[i + 1] + n / 2.0 * (a + b + n * c)
}

/// **Years 1992–2010**
/// Interpolation from Meeus's estimated ΔT for 1990, 2000, and 2010.
#[inline]
fn delta_t_recent(jd: JulianDay) -> Seconds {
    const DT: [Seconds; 3] = [Seconds::new(56.86), Seconds::new(63.83), Seconds::new(70.0)];
    const JD_YEAR_2000_UT: JulianDay = JulianDay::new(2_451_544.5);
    const DECADE_D: Days = Days::new(3_652.5);

    let a = DT[1] - DT[0];
    let b = DT[2] - DT[1];
    let c = b - a;
    let n = days_ratio(jd - JD_YEAR_2000_UT, DECADE_D);
    DT[1] + n / 2.0 * (a + b + n * c)
}

/// **Years > 2010**
/// Extrapolated with Meeus eq. (10.2).
#[inline]
fn delta_t_extrapolated(jd: JulianDay) -> Seconds {
    const JD_EPOCH_1810_UT: JulianDay = JulianDay::new(2_382_148.0);
    const DT_OFFSET_S: Seconds = Seconds::new(-15.0);
    const QUADRATIC_DIVISOR_D2_PER_S: f64 = 41_048_480.0;

    let t = days_ratio(jd - JD_EPOCH_1810_UT, Days::new(1.0));
    DT_OFFSET_S + Seconds::new((t * t) / QUADRATIC_DIVISOR_D2_PER_S)
}

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// **ΔT = TT − UT** in seconds for a Julian Day counted in UT.
///
/// ```
/// use fasti::{delta_t, JulianDay};
///
/// let dt = delta_t(JulianDay::J2000);
/// assert!((dt.value() - 63.83).abs() < 0.5);
/// ```
pub fn delta_t(jd_ut: JulianDay) -> Seconds {
    match jd_ut {
        jd if jd < JulianDay::new(2_067_314.5) => delta_t_ancient(jd),
        jd if jd < JD_TABLE_START_1620 => delta_t_medieval(jd),
        jd if jd < JulianDay::new(2_448_622.5) => delta_t_table(jd),
        jd if jd <= JulianDay::new(2_455_197.5) => delta_t_recent(jd),
        _ => delta_t_extrapolated(jd_ut),
    }
}

/// ΔT for a decimal year such as `1987.5` (Julian years from J2000.0).
#[inline]
pub fn delta_t_for_year(year: f64) -> Seconds {
    delta_t(JulianDay::from_decimal_year(year))
}

/// ΔT at every point of `grid`, read as decimal years.
///
/// Lazy: each sample is evaluated when the iterator reaches it, in grid
/// order.
pub fn delta_t_series(grid: &SampleGrid) -> impl Iterator<Item = (f64, Seconds)> + '_ {
    debug!(
        start = grid.start(),
        end = grid.end(),
        count = grid.count(),
        "evaluating ΔT series"
    );
    grid.points().map(|year| (year, delta_t_for_year(year)))
}

impl Time<JD> {
    /// **ΔT = TT − UT** in seconds, treating this Julian Day as UT.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t(*self)
    }
}
