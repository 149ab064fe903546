// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar calendar dates: proleptic Gregorian and proleptic Julian.
//!
//! [`CivilDate<C>`] mirrors the [`Time<S>`](crate::Time) design: one struct,
//! parameterised by a zero-sized calendar marker `C: SolarCalendar` that
//! carries the intercalation rule.  The calendar is part of the type, so a
//! date is never reinterpreted from its value:
//!
//! ```
//! use fasti::{GregorianDate, JulianDate, Month};
//!
//! let reform = GregorianDate::new(1582, Month::October, 15.0).unwrap();
//! let eve = JulianDate::new(1582, Month::October, 4.0).unwrap();
//! assert_eq!(reform.to_jd().value(), eve.to_jd().value() + 1.0);
//! ```
//!
//! # Day numbers
//!
//! Both calendars are reduced to an integer **JDN** (the Julian Day of the
//! noon that falls on the civil day) with floor division on March-based
//! years, so the leap day is the last day of the counting year.  This is
//! exact for negative (astronomical) years as well: 1 BCE is year `0`.
//!
//! The `day` field is real: its integer part is the day of the month and
//! its fractional part the time of day counted from midnight.  Because JD
//! days start at noon, `to_jd` subtracts half a day and
//! [`Time::<JD>::to_gregorian`](crate::Time::to_gregorian) adds it back.

use super::error::{CalendarError, Result};
use super::instant::Time;
use super::month::Month;
use super::scales::JD;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// First civil year accepted by the constructors.
pub const MIN_YEAR: i32 = -1_000_000;

/// Last civil year accepted by the constructors.
pub const MAX_YEAR: i32 = 1_000_000;

/// Julian Days this far from the epoch cannot land in the supported years.
const MAX_ABS_JD: f64 = 1.0e10;

/// A solar calendar with twelve months and a single leap day in February.
pub trait SolarCalendar: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Calendar name used in diagnostics.
    const NAME: &'static str;

    /// Whether `year` (astronomical numbering) has a 29 February.
    fn is_leap_year(year: i64) -> bool;

    /// JDN of the given civil day.  `month` is 1..=12 and `day` is the day
    /// of the month; neither is range checked here.
    fn jdn_from_ymd(year: i64, month: u8, day: i64) -> i64;

    /// Civil `(year, month, day)` of a JDN.
    fn ymd_from_jdn(jdn: i64) -> (i64, u8, u8);

    /// Number of days in `month` of `year`.
    fn days_in_month(year: i64, month: Month) -> u8 {
        match month {
            Month::February if Self::is_leap_year(year) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }
}

/// Day of a March-based year (March 1st is day 0).
#[inline]
fn march_day_of_year(month: u8, day: i64) -> i64 {
    let mp = if month > 2 {
        i64::from(month) - 3
    } else {
        i64::from(month) + 9
    };
    (153 * mp + 2) / 5 + day - 1
}

/// Inverse of [`march_day_of_year`]: `(month, day)` of a March-based day.
#[inline]
fn month_day_from_march_day(doy: i64) -> (u8, u8) {
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (month as u8, day as u8)
}

/// The proleptic Gregorian calendar.
///
/// Leap years are divisible by 4, except centuries not divisible by 400.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Gregorian;

/// JDN of 0000-03-01 in the Gregorian calendar.
const GREGORIAN_MARCH_EPOCH: i64 = 1_721_120;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = 146_097;

impl SolarCalendar for Gregorian {
    const NAME: &'static str = "Gregorian";

    #[inline]
    fn is_leap_year(year: i64) -> bool {
        year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
    }

    fn jdn_from_ymd(year: i64, month: u8, day: i64) -> i64 {
        let y = if month <= 2 { year - 1 } else { year };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + march_day_of_year(month, day);
        era * DAYS_PER_400_YEARS + doe + GREGORIAN_MARCH_EPOCH
    }

    fn ymd_from_jdn(jdn: i64) -> (i64, u8, u8) {
        let z = jdn - GREGORIAN_MARCH_EPOCH;
        let era = z.div_euclid(DAYS_PER_400_YEARS);
        let doe = z - era * DAYS_PER_400_YEARS;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let (month, day) = month_day_from_march_day(doy);
        let year = yoe + era * 400 + i64::from(month <= 2);
        (year, month, day)
    }
}

/// The proleptic Julian calendar.
///
/// Every fourth year is a leap year, with no century exception.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Julian;

/// JDN of 0000-03-01 in the Julian calendar.
const JULIAN_MARCH_EPOCH: i64 = 1_721_118;

/// Days in a 4-year Julian cycle.
const DAYS_PER_4_YEARS: i64 = 1_461;

impl SolarCalendar for Julian {
    const NAME: &'static str = "Julian";

    #[inline]
    fn is_leap_year(year: i64) -> bool {
        year.rem_euclid(4) == 0
    }

    fn jdn_from_ymd(year: i64, month: u8, day: i64) -> i64 {
        let y = if month <= 2 { year - 1 } else { year };
        let era = y.div_euclid(4);
        let yoe = y - era * 4;
        let doe = yoe * 365 + march_day_of_year(month, day);
        era * DAYS_PER_4_YEARS + doe + JULIAN_MARCH_EPOCH
    }

    fn ymd_from_jdn(jdn: i64) -> (i64, u8, u8) {
        let z = jdn - JULIAN_MARCH_EPOCH;
        let era = z.div_euclid(DAYS_PER_4_YEARS);
        let doe = z - era * DAYS_PER_4_YEARS;
        // The leap day closes the cycle, so day 1460 still belongs to year 3.
        let yoe = (doe - doe / 1_460) / 365;
        let doy = doe - 365 * yoe;
        let (month, day) = month_day_from_march_day(doy);
        let year = yoe + era * 4 + i64::from(month <= 2);
        (year, month, day)
    }
}

/// A date in the solar calendar `C`, with the time of day carried in the
/// fractional part of `day`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct CivilDate<C: SolarCalendar> {
    year: i32,
    month: Month,
    day: f64,
    _calendar: PhantomData<C>,
}

impl<C: SolarCalendar> CivilDate<C> {
    /// Create a validated date.
    ///
    /// # Errors
    ///
    /// * [`CalendarError::UnsupportedYear`] outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    /// * [`CalendarError::InvalidDay`] unless `1 <= day < days_in_month + 1`.
    pub fn new(year: i32, month: Month, day: f64) -> Result<Self> {
        check_year(year)?;
        let max_day = C::days_in_month(i64::from(year), month);
        if !(day.is_finite() && day >= 1.0 && day < f64::from(max_day) + 1.0) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            _calendar: PhantomData,
        })
    }

    /// Create a date from a numeric month.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] for months outside 1..=12, then the
    /// same checks as [`CivilDate::new`].
    pub fn from_ymd(year: i32, month: i32, day: f64) -> Result<Self> {
        Self::new(year, Month::from_number(month)?, day)
    }

    /// Astronomical year (1 BCE is `0`).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month including the time-of-day fraction.
    #[inline]
    pub const fn day(&self) -> f64 {
        self.day
    }

    /// Integer day of the month.
    #[inline]
    pub fn day_of_month(&self) -> u8 {
        self.day.floor() as u8
    }

    /// Time of day as a fraction of a day since midnight, in `[0, 1)`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        self.day - self.day.floor()
    }

    /// Whether `year` is a leap year in this calendar.
    #[inline]
    pub fn is_leap_year(year: i32) -> bool {
        C::is_leap_year(i64::from(year))
    }

    /// Number of days in `month` of `year` in this calendar.
    #[inline]
    pub fn days_in_month(year: i32, month: Month) -> u8 {
        C::days_in_month(i64::from(year), month)
    }

    /// Integer Julian Day Number of the civil day (time of day ignored).
    #[inline]
    pub fn jdn(&self) -> i64 {
        C::jdn_from_ymd(
            i64::from(self.year),
            self.month.number(),
            i64::from(self.day_of_month()),
        )
    }

    /// Continuous Julian Day of this date and time of day.
    ///
    /// Infallible: every constructed date is inside the supported range.
    pub fn to_jd(&self) -> Time<JD> {
        Time::<JD>::new(self.jdn() as f64 - 0.5 + self.day_fraction())
    }

    /// Decompose a Julian Day into a date of this calendar.
    ///
    /// # Errors
    ///
    /// [`CalendarError::ConversionOverflow`] when `jd` is not finite or the
    /// resulting year is outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn from_jd(jd: Time<JD>) -> Result<Self> {
        let (mut jdn, mut fraction) = split_julian_day(jd)?;
        let (mut year, mut month, mut day) = C::ymd_from_jdn(jdn);
        // A fraction within an ulp of 1 rounds the sum onto the next day.
        if f64::from(day) + fraction >= f64::from(day) + 1.0 {
            jdn += 1;
            fraction = 0.0;
            (year, month, day) = C::ymd_from_jdn(jdn);
        }
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(CalendarError::ConversionOverflow { jd: jd.value() })?;
        Ok(Self {
            year,
            month: Month::from_number(i32::from(month))?,
            day: f64::from(day) + fraction,
            _calendar: PhantomData,
        })
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        weekday_from_jdn(self.jdn())
    }

    /// `YYYY-MM-DD` rendering of the civil day.
    pub fn iso(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day_of_month()
        )
    }
}

impl CivilDate<Gregorian> {
    /// Decompose a wall-clock reading into a Gregorian date with the UTC
    /// time of day as the day fraction.
    ///
    /// # Errors
    ///
    /// Only if chrono hands back a year outside the supported range, which
    /// its own range makes impossible in practice.
    pub fn from_utc(datetime: DateTime<Utc>) -> Result<Self> {
        let seconds = f64::from(datetime.num_seconds_from_midnight())
            + f64::from(datetime.nanosecond() % 1_000_000_000) / 1e9;
        let fraction = (seconds / 86_400.0).min(1.0 - f64::EPSILON);
        Self::new(
            datetime.year(),
            Month::from_number(datetime.month() as i32)?,
            f64::from(datetime.day()) + fraction,
        )
    }
}

impl<C: SolarCalendar> std::fmt::Display for CivilDate<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day_of_month(), self.year)
    }
}

#[cfg(feature = "serde")]
impl<C: SolarCalendar> Serialize for CivilDate<C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct(C::NAME, 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, C: SolarCalendar> Deserialize<'de> for CivilDate<C> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: Month,
            day: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear {
            year: i64::from(year),
            min: i64::from(MIN_YEAR),
            max: i64::from(MAX_YEAR),
        })
    }
}

/// Split a Julian Day into the JDN of its civil day and the time of day
/// since midnight.
pub(crate) fn split_julian_day(jd: Time<JD>) -> Result<(i64, f64)> {
    let shifted = jd.value() + 0.5;
    if !shifted.is_finite() || shifted.abs() > MAX_ABS_JD {
        return Err(CalendarError::ConversionOverflow { jd: jd.value() });
    }
    let jdn = shifted.floor();
    Ok((jdn as i64, shifted - jdn))
}

pub(crate) fn weekday_from_jdn(jdn: i64) -> Weekday {
    match (jdn + 1).rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
