// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # fasti
//!
//! Calendar interconversion and chronology helpers.
//!
//! Every date converts through the continuous **Julian Day**, so any two
//! calendars can be bridged with one `to_jd` and one `from_jd`.
//!
//! # Core types
//!
//! - [`Time<S>`]: a day count parameterised by a [`TimeScale`] marker.
//! - [`JulianDay`]: alias for `Time<JD>`, the conversion pivot.
//! - [`ModifiedJulianDay`]: alias for `Time<MJD>`.
//! - [`GregorianDate`] / [`JulianDate`]: proleptic solar calendar dates,
//!   both [`CivilDate<C>`] with the calendar as a type parameter.
//! - [`MoslemDate`]: Islamic tabular civil calendar.
//! - [`JewishDate`]: Hebrew arithmetic calendar.
//!
//! # Chronology
//!
//! - [`gregorian_date_of_easter`] / [`julian_date_of_easter`] and the lazy
//!   [`easter_table`].
//! - [`delta_t`]: ΔT = TT − UT after Meeus.
//! - [`mean_obliquity`] / [`mean_obliquity_fast`]: mean obliquity of the
//!   ecliptic.
//! - [`delta_t_series`] / [`obliquity_series`] over a [`SampleGrid`].
//!
//! # Example
//!
//! ```
//! use fasti::{GregorianDate, JulianDay, Month};
//!
//! let date = GregorianDate::new(2000, Month::January, 1.5).unwrap();
//! let jd = date.to_jd();
//! assert_eq!(jd, JulianDay::J2000);
//! assert_eq!(jd.to_julian().unwrap().to_string(), "December 19, 1999");
//! assert_eq!(jd.to_moslem().unwrap().to_string(), "Ramadan 24, 1420");
//! ```
//!
//! All operations are pure; "now" is always passed in as a
//! `chrono::DateTime<Utc>` (see [`GregorianDate::from_utc`]).
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for dates, months and [`Time`].
//!   Deserialisation validates like the constructors do.

mod civil;
mod computus;
mod delta_t;
mod error;
mod hebrew;
mod instant;
mod julian_day;
mod month;
mod moslem;
mod obliquity;
mod sampling;
mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{CivilDate, Gregorian, Julian, SolarCalendar, MAX_YEAR, MIN_YEAR};
pub use computus::{
    easter_table, gregorian_date_of_easter, julian_date_of_easter, Computus, EasterEntry,
    GREGORIAN_COMPUTUS_FIRST_YEAR, JULIAN_COMPUTUS_FIRST_YEAR,
};
pub use delta_t::{delta_t, delta_t_for_year, delta_t_series};
pub use error::{CalendarError, Result};
pub use hebrew::{JewishDate, HEBREW_MAX_YEAR, HEBREW_MIN_YEAR};
pub use instant::{Time, TimeScale};
pub use month::{JewishMonth, Month, MoslemMonth};
pub use moslem::{MoslemDate, MOSLEM_MAX_YEAR, MOSLEM_MIN_YEAR};
pub use obliquity::{mean_obliquity, mean_obliquity_fast, obliquity_series, ObliquityModel};
pub use sampling::SampleGrid;
pub use scales::{UnixTime, JD, MJD};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day: continuous count of days since noon, 1 January 4713 BCE
/// (proleptic Julian).
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDay = Time<JD>;

/// Modified Julian Day: `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDay = Time<MJD>;

/// A date in the proleptic Gregorian calendar.
pub type GregorianDate = CivilDate<Gregorian>;

/// A date in the proleptic Julian calendar.
///
/// Not to be confused with [`JulianDay`], the continuous day count.
pub type JulianDate = CivilDate<Julian>;
