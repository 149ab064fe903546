// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month enumerations, one closed enum per calendar family.
//!
//! Months are 1-indexed.  Keeping a distinct type per calendar makes it
//! impossible to hand a Hebrew month to a Gregorian constructor.

use crate::error::{CalendarError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generate a 1-indexed month enum with its lookup table and names.
macro_rules! calendar_months {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $num:literal => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $($variant = $num),+
        }

        impl $name {
            /// Every month, in numeric order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of months in the enumeration.
            pub const COUNT: u8 = Self::ALL.len() as u8;

            /// 1-based month number.
            #[inline]
            pub const fn number(self) -> u8 {
                self as u8
            }

            /// English month name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Look a month up by its 1-based number.
            ///
            /// # Errors
            ///
            /// [`CalendarError::InvalidMonth`] when `number` is outside
            /// `1..=COUNT`; nothing wraps around.
            pub fn from_number(number: i32) -> Result<Self> {
                if (1..=i32::from(Self::COUNT)).contains(&number) {
                    Ok(Self::ALL[(number - 1) as usize])
                } else {
                    Err(CalendarError::InvalidMonth {
                        month: number,
                        max: Self::COUNT,
                    })
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = CalendarError;

            #[inline]
            fn try_from(number: u8) -> Result<Self> {
                Self::from_number(i32::from(number))
            }
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(month: $name) -> u8 {
                month.number()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

calendar_months! {
    /// Month of the Gregorian and Julian calendars.
    Month {
        January = 1 => "January",
        February = 2 => "February",
        March = 3 => "March",
        April = 4 => "April",
        May = 5 => "May",
        June = 6 => "June",
        July = 7 => "July",
        August = 8 => "August",
        September = 9 => "September",
        October = 10 => "October",
        November = 11 => "November",
        December = 12 => "December",
    }
}

calendar_months! {
    /// Month of the Islamic (tabular civil) calendar.
    ///
    /// Odd months have 30 days and even months 29, except that
    /// Dhu al-Hijjah gains a 30th day in leap years.
    MoslemMonth {
        Muharram = 1 => "Muharram",
        Safar = 2 => "Safar",
        RabiAlAwwal = 3 => "Rabi' al-Awwal",
        RabiAlThani = 4 => "Rabi' al-Thani",
        JumadaAlUla = 5 => "Jumada al-Ula",
        JumadaAlAkhirah = 6 => "Jumada al-Akhirah",
        Rajab = 7 => "Rajab",
        Shaban = 8 => "Sha'ban",
        Ramadan = 9 => "Ramadan",
        Shawwal = 10 => "Shawwal",
        DhuAlQadah = 11 => "Dhu al-Qa'dah",
        DhuAlHijjah = 12 => "Dhu al-Hijjah",
    }
}

calendar_months! {
    /// Month of the Hebrew calendar.
    ///
    /// Numbered from Nisan, as in the biblical count; the civil year starts
    /// with [`JewishMonth::Tishri`] (month 7).  In leap years
    /// [`JewishMonth::Adar`] is Adar I and [`JewishMonth::AdarII`] follows it.
    JewishMonth {
        Nisan = 1 => "Nisan",
        Iyyar = 2 => "Iyyar",
        Sivan = 3 => "Sivan",
        Tammuz = 4 => "Tammuz",
        Av = 5 => "Av",
        Elul = 6 => "Elul",
        Tishri = 7 => "Tishri",
        Marheshvan = 8 => "Marheshvan",
        Kislev = 9 => "Kislev",
        Tevet = 10 => "Tevet",
        Shevat = 11 => "Shevat",
        Adar = 12 => "Adar",
        AdarII = 13 => "Adar II",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_are_one_based() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::COUNT, 12);
        assert_eq!(JewishMonth::COUNT, 13);
        assert_eq!(MoslemMonth::COUNT, 12);
    }

    #[test]
    fn month_lookup_roundtrips() {
        for &m in Month::ALL {
            assert_eq!(Month::from_number(i32::from(m.number())), Ok(m));
        }
        for &m in JewishMonth::ALL {
            assert_eq!(JewishMonth::try_from(m.number()), Ok(m));
        }
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert_eq!(
            Month::from_number(13),
            Err(CalendarError::InvalidMonth { month: 13, max: 12 })
        );
        assert_eq!(
            Month::try_from(0),
            Err(CalendarError::InvalidMonth { month: 0, max: 12 })
        );
        assert!(MoslemMonth::from_number(-1).is_err());
        assert!(JewishMonth::from_number(14).is_err());
        assert!(JewishMonth::from_number(13).is_ok());
    }

    #[test]
    fn month_names() {
        assert_eq!(Month::March.to_string(), "March");
        assert_eq!(MoslemMonth::Ramadan.to_string(), "Ramadan");
        assert_eq!(JewishMonth::AdarII.name(), "Adar II");
    }
}
