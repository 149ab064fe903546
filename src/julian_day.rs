// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions: calendar decomposition,
//! the MJD view, and epoch-relative counts used by the astronomical series.

use chrono::Weekday;
use qtty::*;

use super::civil::{self, CivilDate, Gregorian, Julian, SolarCalendar};
use super::error::Result;
use super::instant::Time;
use super::scales::{JD, MJD, MJD_EPOCH};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian year expressed in days.
    pub const JULIAN_YEAR: Days = Days::new(365.25);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0 (the `T` of Meeus' series).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Build a Julian Day from a decimal Julian-year count such as `1987.5`.
    ///
    /// Year `2000.0` maps to J2000.0; each unit is [`Self::JULIAN_YEAR`].
    #[inline]
    pub fn from_decimal_year(year: f64) -> Self {
        Self::J2000 + Days::new((year - 2000.0) * Self::JULIAN_YEAR.value())
    }

    /// Modified Julian Day value, `JD − 2 400 000.5`.
    #[inline]
    pub fn as_mjd(&self) -> f64 {
        (self.quantity() - MJD_EPOCH).value()
    }

    /// Typed MJD corresponding to this JD.
    ///
    /// Kept as a convenience wrapper for `self.to::<MJD>()`.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }

    /// Decompose into a date of any solar calendar.
    pub fn to_calendar<C: SolarCalendar>(&self) -> Result<CivilDate<C>> {
        CivilDate::<C>::from_jd(*self)
    }

    /// Proleptic Gregorian date, with the time of day in the day fraction.
    ///
    /// # Errors
    ///
    /// [`CalendarError::ConversionOverflow`](crate::CalendarError::ConversionOverflow)
    /// for non-finite values or days beyond the supported years.
    pub fn to_gregorian(&self) -> Result<CivilDate<Gregorian>> {
        self.to_calendar::<Gregorian>()
    }

    /// Proleptic Julian-calendar date, with the time of day in the day
    /// fraction.
    ///
    /// # Errors
    ///
    /// Same as [`Time::to_gregorian`].
    pub fn to_julian(&self) -> Result<CivilDate<Julian>> {
        self.to_calendar::<Julian>()
    }

    /// Day of the week of the civil day containing this instant.
    pub fn weekday(&self) -> Result<Weekday> {
        let (jdn, _) = civil::split_julian_day(*self)?;
        Ok(civil::weekday_from_jdn(jdn))
    }
}

impl<C: SolarCalendar> From<CivilDate<C>> for Time<JD> {
    #[inline]
    fn from(date: CivilDate<C>) -> Self {
        date.to_jd()
    }
}

impl From<Centuries> for Time<JD> {
    fn from(centuries: Centuries) -> Self {
        // `Centuries` are interpreted as Julian centuries relative to J2000.
        Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
    }
}

impl From<Time<JD>> for Centuries {
    fn from(jd: Time<JD>) -> Self {
        jd.julian_centuries()
    }
}
