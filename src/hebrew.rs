// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew (Jewish) arithmetic calendar.
//!
//! Lunisolar: 12 months in a common year, 13 in the 7 leap years of each
//! 19-year Metonic cycle.  The year starts on 1 Tishri, fixed from the mean
//! conjunction (*molad*) of Tishri and delayed by the postponement rules,
//! so a year is 353, 354 or 355 days long (383, 384 or 385 when leap).  The
//! two variable months, Marheshvan and Kislev, absorb the difference.
//!
//! Time is measured in *parts* (halakim), 1080 to the hour, 25 920 to the
//! day.  The mean lunation is 29 d 13 h 793 p.

use super::civil;
use super::error::{CalendarError, Result};
use super::instant::Time;
use super::month::JewishMonth;
use super::scales::JD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// JDN of 1 Tishri AM 1, origin of the elapsed-day count.
const HEBREW_EPOCH: i64 = 347_998;

const PARTS_PER_DAY: i64 = 25_920;

/// Parts of the mean lunation beyond 29 days.
const LUNATION_PARTS: i64 = 13_753;

/// Position of the molad of Tishri AM 1 (*molad BaHaRaD*) in parts,
/// relative to the elapsed-day origin.
const MOLAD_OFFSET_PARTS: i64 = 12_084;

/// First supported Hebrew year.
pub const HEBREW_MIN_YEAR: i32 = 1;

/// Last supported Hebrew year.
pub const HEBREW_MAX_YEAR: i32 = 1_000_000;

/// A date in the Hebrew calendar.
///
/// Months use the biblical numbering of [`JewishMonth`] (Nisan is 1), while
/// the year number changes on 1 Tishri.  Like [`MoslemDate`](crate::MoslemDate),
/// Hebrew dates are whole days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct JewishDate {
    year: i32,
    month: JewishMonth,
    day: u8,
}

impl JewishDate {
    /// Create a validated Hebrew date.
    ///
    /// # Errors
    ///
    /// * [`CalendarError::UnsupportedYear`] outside
    ///   [`HEBREW_MIN_YEAR`]..=[`HEBREW_MAX_YEAR`].
    /// * [`CalendarError::InvalidMonth`] for Adar II in a common year.
    /// * [`CalendarError::InvalidDay`] when `day` does not fit the month.
    pub fn new(year: i32, month: JewishMonth, day: u8) -> Result<Self> {
        check_year(i64::from(year))?;
        let y = i64::from(year);
        if month.number() > last_month_of_year(y) {
            return Err(CalendarError::InvalidMonth {
                month: i32::from(month.number()),
                max: last_month_of_year(y),
            });
        }
        let max_day = days_in_month(y, month.number());
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day: f64::from(day),
                month: month.number(),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Create a date from a numeric month (1 = Nisan, 7 = Tishri).
    pub fn from_ymd(year: i32, month: i32, day: u8) -> Result<Self> {
        Self::new(year, JewishMonth::from_number(month)?, day)
    }

    /// Anno Mundi year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> JewishMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether `year` has the extra month Adar II.
    #[inline]
    pub fn is_leap_year(year: i32) -> bool {
        is_leap(i64::from(year))
    }

    /// Days in `year`: 353 to 355, or 383 to 385 in leap years.
    pub fn days_in_year(year: i32) -> u16 {
        days_in_year(i64::from(year)) as u16
    }

    /// Days in `month` of `year`, 29 or 30.  Adar II in a common year
    /// reports 0, since the month does not exist.
    pub fn days_in_month(year: i32, month: JewishMonth) -> u8 {
        let y = i64::from(year);
        if month.number() > last_month_of_year(y) {
            0
        } else {
            days_in_month(y, month.number())
        }
    }

    /// Integer Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        jdn_from_ymd(
            i64::from(self.year),
            self.month.number(),
            i64::from(self.day),
        )
    }

    /// Julian Day at the midnight starting this date.
    ///
    /// The Hebrew day begins at the previous sunset; the civil midnight is
    /// used here so that the date lines up with the solar calendars.
    #[inline]
    pub fn to_jd(&self) -> Time<JD> {
        Time::<JD>::new(self.jdn() as f64 - 0.5)
    }

    /// The Hebrew date containing the Julian Day `jd`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::ConversionOverflow`] for non-finite input and
    /// [`CalendarError::UnsupportedYear`] before the Hebrew epoch.
    pub fn from_jd(jd: Time<JD>) -> Result<Self> {
        let (jdn, _) = civil::split_julian_day(jd)?;
        let (year, month, day) = ymd_from_jdn(jdn);
        check_year(year)?;
        Ok(Self {
            year: year as i32,
            month: JewishMonth::from_number(i32::from(month))?,
            day: day as u8,
        })
    }
}

impl Time<JD> {
    /// The Hebrew date containing this Julian Day.
    pub fn to_jewish(&self) -> Result<JewishDate> {
        JewishDate::from_jd(*self)
    }
}

impl PartialOrd for JewishDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JewishDate {
    /// Chronological order.  Field order would be wrong: Nisan (1) comes
    /// after Tishri (7) within a year.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.jdn().cmp(&other.jdn())
    }
}

impl std::fmt::Display for JewishDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = match self.month {
            JewishMonth::Adar if Self::is_leap_year(self.year) => "Adar I",
            m => m.name(),
        };
        write!(f, "{} {}, {}", month, self.day, self.year)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JewishDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: JewishMonth,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

fn check_year(year: i64) -> Result<()> {
    if (i64::from(HEBREW_MIN_YEAR)..=i64::from(HEBREW_MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear {
            year,
            min: i64::from(HEBREW_MIN_YEAR),
            max: i64::from(HEBREW_MAX_YEAR),
        })
    }
}

#[inline]
fn is_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

#[inline]
fn last_month_of_year(year: i64) -> u8 {
    if is_leap(year) {
        13
    } else {
        12
    }
}

/// Days from the epoch to the molad of Tishri of `year`, after the
/// "molad zaken" and weekday postponements.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = MOLAD_OFFSET_PARTS + LUNATION_PARTS * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    // Rosh Hashanah never falls on Sunday, Wednesday or Friday.
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay that keeps every year length legal (no 356- or 382-day
/// years).
fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

/// JDN of 1 Tishri of `year`.
fn new_year(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn days_in_year(year: i64) -> i64 {
    new_year(year + 1) - new_year(year)
}

fn days_in_month(year: i64, month: u8) -> u8 {
    let short = match month {
        2 | 4 | 6 | 10 | 13 => true,
        12 => !is_leap(year),
        // Marheshvan is long only in complete years, Kislev short only in
        // deficient ones.
        8 => days_in_year(year) % 10 != 5,
        9 => days_in_year(year) % 10 == 3,
        _ => false,
    };
    if short {
        29
    } else {
        30
    }
}

fn month_days(year: i64, months: impl Iterator<Item = u8>) -> i64 {
    months.map(|m| i64::from(days_in_month(year, m))).sum()
}

fn jdn_from_ymd(year: i64, month: u8, day: i64) -> i64 {
    let before = if month < 7 {
        month_days(year, 7..=last_month_of_year(year)) + month_days(year, 1..month)
    } else {
        month_days(year, 7..month)
    };
    new_year(year) + before + day - 1
}

fn ymd_from_jdn(jdn: i64) -> (i64, u8, i64) {
    // Mean year is 35 975 351 / 98 496 days; the estimate is never late.
    let approx = (98_496 * (jdn - HEBREW_EPOCH)).div_euclid(35_975_351) + 1;
    let year = if new_year(approx) <= jdn {
        approx
    } else {
        approx - 1
    };
    let last = last_month_of_year(year);
    let start = if jdn < jdn_from_ymd(year, 1, 1) { 7 } else { 1 };
    let month = (start..=last)
        .find(|&m| jdn <= jdn_from_ymd(year, m, i64::from(days_in_month(year, m))))
        .unwrap_or(last);
    let day = jdn - jdn_from_ymd(year, month, 1) + 1;
    (year, month, day)
}
