// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date of Easter Sunday.
//!
//! * Gregorian computus: the anonymous algorithm published by Butcher
//!   (1876), as given by Meeus.  Valid for every year of the Gregorian
//!   reform, i.e. from 1583.
//! * Julian computus: Meeus' algorithm for the Julian calendar, valid from
//!   the first Easter tables after the Council of Nicaea (326).  This is the
//!   Orthodox Easter; its result is a Julian-calendar date.
//!
//! Both are pure integer arithmetic and always land on a Sunday.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use super::civil::{CivilDate, Gregorian, Julian, MAX_YEAR};
use super::error::{CalendarError, Result};
use super::instant::Time;
use super::month::Month;
use super::scales::JD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First year covered by the Gregorian computus.
pub const GREGORIAN_COMPUTUS_FIRST_YEAR: i32 = 1583;

/// First year covered by the Julian computus.
pub const JULIAN_COMPUTUS_FIRST_YEAR: i32 = 326;

/// Which Easter rule to apply.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Computus {
    /// Western rule, Gregorian calendar.
    #[default]
    Gregorian,
    /// Orthodox rule, Julian calendar.
    Julian,
}

impl Computus {
    /// First year this computus is defined for.
    pub const fn first_year(self) -> i32 {
        match self {
            Self::Gregorian => GREGORIAN_COMPUTUS_FIRST_YEAR,
            Self::Julian => JULIAN_COMPUTUS_FIRST_YEAR,
        }
    }

    /// Easter of `year` under this computus, as a table entry.
    pub fn easter(self, year: i32) -> Result<EasterEntry> {
        let (month, day, jd) = match self {
            Self::Gregorian => {
                let date = gregorian_date_of_easter(year)?;
                (date.month(), date.day_of_month(), date.to_jd())
            }
            Self::Julian => {
                let date = julian_date_of_easter(year)?;
                (date.month(), date.day_of_month(), date.to_jd())
            }
        };
        Ok(EasterEntry {
            year,
            computus: self,
            month,
            day,
            jd,
        })
    }
}

impl std::fmt::Display for Computus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gregorian => f.write_str("Gregorian"),
            Self::Julian => f.write_str("Julian"),
        }
    }
}

/// One row of an Easter table.
///
/// `month` and `day` are in the calendar of `computus`; `jd` is the
/// midnight starting Easter Sunday, for cross-calendar use.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EasterEntry {
    pub year: i32,
    pub computus: Computus,
    pub month: Month,
    pub day: u8,
    pub jd: Time<JD>,
}

impl std::fmt::Display for EasterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.year, self.month, self.day, self.computus
        )
    }
}

/// Easter Sunday of `year` under the Gregorian computus.
///
/// ```
/// use fasti::{gregorian_date_of_easter, Month};
///
/// let easter = gregorian_date_of_easter(2024).unwrap();
/// assert_eq!((easter.month(), easter.day_of_month()), (Month::March, 31));
/// ```
///
/// # Errors
///
/// [`CalendarError::UnsupportedYear`] before 1583 or after the last
/// supported civil year.
pub fn gregorian_date_of_easter(year: i32) -> Result<CivilDate<Gregorian>> {
    check_year(year, GREGORIAN_COMPUTUS_FIRST_YEAR)?;
    let y = i64::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    CivilDate::from_ymd(year, (n / 31) as i32, (n % 31 + 1) as f64)
}

/// Easter Sunday of `year` under the Julian computus, as a Julian date.
///
/// # Errors
///
/// [`CalendarError::UnsupportedYear`] before 326 or after the last
/// supported civil year.
pub fn julian_date_of_easter(year: i32) -> Result<CivilDate<Julian>> {
    check_year(year, JULIAN_COMPUTUS_FIRST_YEAR)?;
    let y = i64::from(year);
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let n = d + e + 114;
    CivilDate::from_ymd(year, (n / 31) as i32, (n % 31 + 1) as f64)
}

/// Lazily compute Easter for every year in `years`.
///
/// Years outside the computus' range yield an error entry rather than
/// ending the iteration, so a table can straddle the reform.
///
/// ```
/// use fasti::{easter_table, Computus};
///
/// let rows: Vec<_> = easter_table(2024..=2026, Computus::Gregorian)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(rows.len(), 3);
/// ```
pub fn easter_table(
    years: RangeInclusive<i32>,
    computus: Computus,
) -> impl Iterator<Item = Result<EasterEntry>> {
    debug!(
        first = *years.start(),
        last = *years.end(),
        %computus,
        "building Easter table"
    );
    years.map(move |year| {
        let entry = computus.easter(year);
        if let Err(err) = &entry {
            trace!(year, %computus, %err, "Easter undefined for year");
        }
        entry
    })
}

fn check_year(year: i32, first: i32) -> Result<()> {
    if (first..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear {
            year: i64::from(year),
            min: i64::from(first),
            max: i64::from(MAX_YEAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn gregorian_known_years() {
        let cases = [
            (2024, Month::March, 31),
            (2025, Month::April, 20),
            (2000, Month::April, 23),
            (1818, Month::March, 22),
            (2285, Month::March, 22),
            (1943, Month::April, 25),
        ];
        for (year, month, day) in cases {
            let easter = gregorian_date_of_easter(year).unwrap();
            assert_eq!(
                (easter.month(), easter.day_of_month()),
                (month, day),
                "{year}"
            );
        }
    }

    #[test]
    fn julian_known_years() {
        let easter = julian_date_of_easter(2024).unwrap();
        assert_eq!(easter.iso(), "2024-04-22");
        assert_eq!(easter.to_jd().to_gregorian().unwrap().iso(), "2024-05-05");

        let easter = julian_date_of_easter(2025).unwrap();
        assert_eq!(easter.iso(), "2025-04-07");
        assert_eq!(easter.to_jd().to_gregorian().unwrap().iso(), "2025-04-20");

        let easter = julian_date_of_easter(1492).unwrap();
        assert_eq!(easter.iso(), "1492-04-22");
    }

    #[test]
    fn easter_is_always_sunday() {
        for year in 1583..=2600 {
            let easter = gregorian_date_of_easter(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "Gregorian {year}");
        }
        for year in 326..=2600 {
            let easter = julian_date_of_easter(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "Julian {year}");
        }
    }

    #[test]
    fn years_before_the_computus_are_rejected() {
        assert_eq!(
            gregorian_date_of_easter(1582),
            Err(CalendarError::UnsupportedYear {
                year: 1582,
                min: 1583,
                max: i64::from(MAX_YEAR)
            })
        );
        assert!(matches!(
            julian_date_of_easter(325),
            Err(CalendarError::UnsupportedYear { min: 326, .. })
        ));
        assert!(gregorian_date_of_easter(MAX_YEAR + 1).is_err());
    }

    #[test]
    fn entry_carries_the_computus_calendar() {
        let entry = Computus::Julian.easter(2024).unwrap();
        assert_eq!((entry.month, entry.day), (Month::April, 22));
        assert_eq!(entry.jd.weekday(), Ok(Weekday::Sun));
        assert_eq!(entry.to_string(), "2024: April 22 (Julian)");
    }

    #[test]
    fn table_is_lazy_and_reports_errors_per_year() {
        let mut table = easter_table(1581..=1584, Computus::Gregorian);
        assert!(table.next().unwrap().is_err());
        assert!(table.next().unwrap().is_err());
        let entry = table.next().unwrap().unwrap();
        assert_eq!((entry.year, entry.month, entry.day), (1583, Month::April, 10));
        assert!(table.next().unwrap().is_ok());
        assert!(table.next().is_none());
    }
}
