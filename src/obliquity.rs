// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean obliquity of the ecliptic, ε₀.
//!
//! Two series from chapter 22 of Meeus' *Astronomical Algorithms*, both in
//! Julian centuries `T` from J2000.0:
//!
//! * [`mean_obliquity_fast`]: the IAU 1980 cubic (eq. 22.2).  Error about
//!   1″ over 2000 years and 10″ over 4000 years from J2000.
//! * [`mean_obliquity`]: Laskar's 10th-degree series in `U = T/100`
//!   (eq. 22.3), 0.01″ after 1000 years and a few arcseconds after 10 000.
//!   Only meaningful for |U| < 1.
//!
//! Nutation is not included: this is the *mean* obliquity.

use qtty::*;
use tracing::debug;

use super::instant::Time;
use super::sampling::SampleGrid;
use super::scales::JD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ε₀ at J2000.0: 23° 26′ 21.448″, in arcseconds.
const EPSILON_J2000_ARCSEC: f64 = 84_381.448;

const ARCSEC_PER_DEGREE: f64 = 3_600.0;

/// IAU 1980 coefficients in arcseconds, ascending powers of `T`.
const IAU_1980: [f64; 4] = [EPSILON_J2000_ARCSEC, -46.815_0, -0.000_59, 0.001_813];

/// Laskar (1986) coefficients in arcseconds, ascending powers of `U`.
const LASKAR_1986: [f64; 11] = [
    EPSILON_J2000_ARCSEC,
    -4_680.93,
    -1.55,
    1_999.25,
    -51.38,
    -249.67,
    -39.05,
    7.12,
    27.87,
    5.79,
    2.45,
];

/// Which obliquity series to evaluate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObliquityModel {
    /// IAU 1980 cubic in `T`.
    Fast,
    /// Laskar's series in `T/100`.
    #[default]
    Accurate,
}

impl ObliquityModel {
    /// Mean obliquity at `jd` under this model.
    pub fn evaluate(self, jd: Time<JD>) -> Degrees {
        self.at_centuries(jd.julian_centuries().value())
    }

    fn at_centuries(self, t: f64) -> Degrees {
        let arcsec = match self {
            Self::Fast => poly(t, &IAU_1980),
            Self::Accurate => poly(t / 100.0, &LASKAR_1986),
        };
        Degrees::new(arcsec / ARCSEC_PER_DEGREE)
    }
}

/// Mean obliquity by the IAU 1980 cubic (Meeus eq. 22.2).
///
/// ```
/// use fasti::{mean_obliquity_fast, JulianDay};
///
/// let eps = mean_obliquity_fast(JulianDay::J2000);
/// assert!((eps.value() - 23.439_291_1).abs() < 1e-7);
/// ```
#[inline]
pub fn mean_obliquity_fast(jd: Time<JD>) -> Degrees {
    ObliquityModel::Fast.evaluate(jd)
}

/// Mean obliquity by Laskar's series (Meeus eq. 22.3).
#[inline]
pub fn mean_obliquity(jd: Time<JD>) -> Degrees {
    ObliquityModel::Accurate.evaluate(jd)
}

/// Mean obliquity at every point of `grid`, read as Julian centuries from
/// J2000.0.  Lazy and in grid order.
pub fn obliquity_series(
    grid: &SampleGrid,
    model: ObliquityModel,
) -> impl Iterator<Item = (f64, Degrees)> + '_ {
    debug!(
        start = grid.start(),
        end = grid.end(),
        count = grid.count(),
        ?model,
        "evaluating obliquity series"
    );
    grid.points().map(move |t| (t, model.at_centuries(t)))
}

/// Horner evaluation of `coeffs[0] + coeffs[1]·x + …`.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000_DEGREES: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3_600.0;

    #[test]
    fn both_models_agree_at_j2000() {
        let jd = Time::<JD>::J2000;
        assert!((mean_obliquity_fast(jd).value() - J2000_DEGREES).abs() < 1e-12);
        assert!((mean_obliquity(jd).value() - J2000_DEGREES).abs() < 1e-12);
    }

    #[test]
    fn obliquity_decreases_today() {
        let later = Time::<JD>::from(Centuries::new(1.0));
        let fast = mean_obliquity_fast(later).value();
        assert!((fast * 3_600.0 - 84_334.634_223).abs() < 1e-6);
        assert!(fast < J2000_DEGREES);
    }

    #[test]
    fn models_agree_near_j2000() {
        for t in [-2.0, -1.0, 0.5, 1.0, 2.0] {
            let jd = Time::<JD>::from(Centuries::new(t));
            let diff = (mean_obliquity_fast(jd) - mean_obliquity(jd)).value().abs();
            assert!(diff * 3_600.0 < 0.05, "T = {t}: {} arcsec", diff * 3_600.0);
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″.
        let jd = Time::<JD>::new(2_446_895.5);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3_600.0;
        assert!((mean_obliquity(jd).value() - expected).abs() < 0.001 / 3_600.0);
    }

    #[test]
    fn default_model_is_accurate() {
        assert_eq!(ObliquityModel::default(), ObliquityModel::Accurate);
        let jd = Time::<JD>::new(2_446_895.5);
        assert_eq!(ObliquityModel::default().evaluate(jd), mean_obliquity(jd));
    }

    #[test]
    fn series_matches_pointwise_evaluation() {
        let grid = SampleGrid::new(-10.0, 10.0, 21).unwrap();
        let series: Vec<(f64, Degrees)> = obliquity_series(&grid, ObliquityModel::Fast).collect();
        assert_eq!(series.len(), 21);
        assert_eq!(series[10].0, 0.0);
        assert!((series[10].1.value() - J2000_DEGREES).abs() < 1e-12);
        assert!(series.windows(2).all(|w| w[0].1 > w[1].1));
    }
}
