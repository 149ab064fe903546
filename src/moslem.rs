// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Islamic civil (tabular) calendar.
//!
//! A purely arithmetic lunar calendar: twelve months alternating 30 and 29
//! days, 354 days in a common year and 355 in a leap year, with 11 leap
//! years in every 30-year cycle (years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26
//! and 29).  The epoch, 1 Muharram 1 AH, is Friday 16 July 622 in the
//! Julian calendar (JDN 1 948 440).
//!
//! Conversions go through the same integer JDN as the solar calendars, so
//! `Moslem → Julian → JD → Gregorian` agrees with `Moslem → JD → Gregorian`.

use super::civil::{self, CivilDate, Julian};
use super::error::{CalendarError, Result};
use super::instant::Time;
use super::month::MoslemMonth;
use super::scales::JD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// JDN of 1 Muharram 1 AH (civil epoch).
const MOSLEM_EPOCH: i64 = 1_948_440;

/// First supported Moslem year.
pub const MOSLEM_MIN_YEAR: i32 = 1;

/// Last supported Moslem year.
pub const MOSLEM_MAX_YEAR: i32 = 1_000_000;

/// A date in the Islamic civil calendar.
///
/// Moslem dates are whole days: converting a date with a time of day drops
/// the fraction, and converting back lands on midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MoslemDate {
    year: i32,
    month: MoslemMonth,
    day: u8,
}

impl MoslemDate {
    /// Create a validated Moslem date.
    ///
    /// # Errors
    ///
    /// * [`CalendarError::UnsupportedYear`] before 1 AH or after
    ///   [`MOSLEM_MAX_YEAR`].
    /// * [`CalendarError::InvalidDay`] when `day` does not fit the month.
    pub fn new(year: i32, month: MoslemMonth, day: u8) -> Result<Self> {
        check_year(i64::from(year))?;
        let max_day = Self::days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day: f64::from(day),
                month: month.number(),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Create a date from a numeric month (1 = Muharram).
    pub fn from_ymd(year: i32, month: i32, day: u8) -> Result<Self> {
        Self::new(year, MoslemMonth::from_number(month)?, day)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> MoslemMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether `year` has 355 days.
    #[inline]
    pub fn is_leap_year(year: i32) -> bool {
        (14 + 11 * i64::from(year)).rem_euclid(30) < 11
    }

    /// Days in `month` of `year`: 30 for odd months, 29 for even ones, and
    /// 30 for Dhu al-Hijjah in leap years.
    pub fn days_in_month(year: i32, month: MoslemMonth) -> u8 {
        match month {
            MoslemMonth::DhuAlHijjah if Self::is_leap_year(year) => 30,
            m if m.number() % 2 == 1 => 30,
            _ => 29,
        }
    }

    /// Days in `year` (354 or 355).
    #[inline]
    pub fn days_in_year(year: i32) -> u16 {
        354 + u16::from(Self::is_leap_year(year))
    }

    /// Integer Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        jdn_from_ymd(
            i64::from(self.year),
            i64::from(self.month.number()),
            i64::from(self.day),
        )
    }

    /// Julian Day at the midnight starting this date.
    #[inline]
    pub fn to_jd(&self) -> Time<JD> {
        Time::<JD>::new(self.jdn() as f64 - 0.5)
    }

    /// The Moslem date containing the Julian Day `jd`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::ConversionOverflow`] for non-finite input and
    /// [`CalendarError::UnsupportedYear`] before the Islamic epoch.
    pub fn from_jd(jd: Time<JD>) -> Result<Self> {
        let (jdn, _) = civil::split_julian_day(jd)?;
        let (year, month, day) = ymd_from_jdn(jdn);
        check_year(year)?;
        Ok(Self {
            year: year as i32,
            month: MoslemMonth::from_number(month as i32)?,
            day: day as u8,
        })
    }

    /// Convert a Julian-calendar date (its time of day is dropped).
    pub fn from_julian(date: &CivilDate<Julian>) -> Result<Self> {
        Self::from_jd(date.to_jd())
    }

    /// The same day in the Julian calendar, at midnight.
    pub fn to_julian(&self) -> Result<CivilDate<Julian>> {
        CivilDate::<Julian>::from_jd(self.to_jd())
    }
}

impl CivilDate<Julian> {
    /// The Julian-calendar date of a Moslem date, at midnight.
    pub fn from_moslem(date: &MoslemDate) -> Result<Self> {
        date.to_julian()
    }
}

impl Time<JD> {
    /// The Moslem date containing this Julian Day.
    pub fn to_moslem(&self) -> Result<MoslemDate> {
        MoslemDate::from_jd(*self)
    }
}

impl std::fmt::Display for MoslemDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.year)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MoslemDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: MoslemMonth,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

fn check_year(year: i64) -> Result<()> {
    if (i64::from(MOSLEM_MIN_YEAR)..=i64::from(MOSLEM_MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear {
            year,
            min: i64::from(MOSLEM_MIN_YEAR),
            max: i64::from(MOSLEM_MAX_YEAR),
        })
    }
}

fn jdn_from_ymd(year: i64, month: i64, day: i64) -> i64 {
    MOSLEM_EPOCH - 1
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + 29 * (month - 1)
        + month / 2
        + day
}

fn ymd_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let year = (30 * (jdn - MOSLEM_EPOCH) + 10_646).div_euclid(10_631);
    let prior_days = jdn - jdn_from_ymd(year, 1, 1);
    let month = (11 * prior_days + 330).div_euclid(325);
    let day = jdn - jdn_from_ymd(year, month, 1) + 1;
    (year, month, day)
}
