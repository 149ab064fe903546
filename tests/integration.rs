use chrono::{DateTime, TimeZone, Utc, Weekday};
use fasti::{
    easter_table, gregorian_date_of_easter, julian_date_of_easter, CalendarError, Computus,
    GregorianDate, JewishDate, JewishMonth, JulianDate, JulianDay, ModifiedJulianDay, Month,
    MoslemDate, MoslemMonth, SampleGrid,
};
use proptest::prelude::*;

#[test]
fn utc_roundtrip_j2000_is_stable() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDay::from_utc(datetime);
    assert!((jd - JulianDay::J2000).value().abs() < 1e-9);
    let back = jd.to_utc().expect("to_utc");
    let delta_ns = back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
    assert!(delta_ns.abs() < 1_000);
}

#[test]
fn fixed_points() {
    let j2000 = GregorianDate::new(2000, Month::January, 1.5).unwrap();
    assert_eq!(j2000.to_jd().value(), 2_451_545.0);

    let reform = GregorianDate::new(1582, Month::October, 15.0).unwrap();
    let eve = JulianDate::new(1582, Month::October, 4.0).unwrap();
    assert_eq!(reform.to_jd().value(), eve.to_jd().value() + 1.0);
    assert_eq!(reform.weekday(), Weekday::Fri);
    assert_eq!(eve.weekday(), Weekday::Thu);

    let mjd_epoch = GregorianDate::new(1858, Month::November, 17.0).unwrap();
    assert_eq!(mjd_epoch.to_jd().as_mjd(), 0.0);
}

#[test]
fn mjd_view_matches_typed_scale() {
    let jd = JulianDay::new(2_460_000.25);
    let mjd: ModifiedJulianDay = jd.into();
    assert_eq!(mjd.value(), jd.as_mjd());
    assert_eq!(jd.as_mjd(), 2_460_000.25 - 2_400_000.5);
}

#[test]
fn easter_reference_dates() {
    assert_eq!(gregorian_date_of_easter(2024).unwrap().iso(), "2024-03-31");
    assert_eq!(gregorian_date_of_easter(2025).unwrap().iso(), "2025-04-20");
    let julian = julian_date_of_easter(2024).unwrap();
    assert_eq!(julian.iso(), "2024-04-22");
    assert_eq!(julian.to_jd().to_gregorian().unwrap().iso(), "2024-05-05");
}

#[test]
fn easter_table_spans_both_rules() {
    let western: Vec<_> = easter_table(2020..=2030, Computus::Gregorian)
        .collect::<Result<_, _>>()
        .unwrap();
    let eastern: Vec<_> = easter_table(2020..=2030, Computus::Julian)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(western.len(), 11);
    for (w, e) in western.iter().zip(&eastern) {
        assert_eq!(w.year, e.year);
        // Orthodox Easter is never earlier than the western one.
        assert!(e.jd >= w.jd, "{}", w.year);
        assert_eq!(w.jd.weekday(), Ok(Weekday::Sun));
        assert_eq!(e.jd.weekday(), Ok(Weekday::Sun));
    }
    // 2025: both rules agree.
    assert_eq!(western[5].jd, eastern[5].jd);
}

#[test]
fn moslem_chain_agrees_with_direct_conversion() {
    let moslem = MoslemDate::new(1445, MoslemMonth::Ramadan, 1).unwrap();
    let via_julian = JulianDate::from_moslem(&moslem).unwrap();
    let direct = moslem.to_jd().to_gregorian().unwrap();
    assert_eq!(via_julian.to_jd().to_gregorian().unwrap(), direct);
    assert_eq!(direct.iso(), "2024-03-11");
    assert_eq!(MoslemDate::from_julian(&via_julian).unwrap(), moslem);
}

#[test]
fn hebrew_and_moslem_on_the_same_day() {
    let day = GregorianDate::new(2023, Month::September, 16.0).unwrap().to_jd();
    assert_eq!(
        day.to_jewish().unwrap(),
        JewishDate::new(5784, JewishMonth::Tishri, 1).unwrap()
    );
    assert_eq!(day.to_moslem().unwrap().to_string(), "Rabi' al-Awwal 1, 1445");
}

#[test]
fn invalid_month_is_reported_for_every_calendar() {
    assert!(matches!(
        GregorianDate::from_ymd(2024, 13, 1.0),
        Err(CalendarError::InvalidMonth { month: 13, .. })
    ));
    assert!(matches!(
        JulianDate::from_ymd(2024, 0, 1.0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        MoslemDate::from_ymd(1445, 0, 1),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        JewishDate::from_ymd(5783, 13, 1),
        Err(CalendarError::InvalidMonth { month: 13, max: 12 })
    ));
}

#[test]
fn wall_clock_seeds_every_calendar() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 6, 0, 0).unwrap();
    let today = GregorianDate::from_utc(now).unwrap();
    assert_eq!(today.iso(), "2024-03-31");
    assert!((today.day_fraction() - 0.25).abs() < 1e-12);
    let jd = today.to_jd();
    assert!((jd.value() - JulianDay::from_utc(now).value()).abs() < 1e-8);
    assert_eq!(jd.to_julian().unwrap().iso(), "2024-03-18");
}

#[test]
fn delta_t_and_obliquity_series_share_a_grid_type() {
    let years = SampleGrid::new(1800.0, 2000.0, 11).unwrap();
    let dt: Vec<_> = fasti::delta_t_series(&years).collect();
    assert_eq!(dt.len(), 11);
    assert!((dt[10].1.value() - 63.83).abs() < 0.5);

    let centuries = SampleGrid::new(-1.0, 1.0, 3).unwrap();
    let eps: Vec<_> =
        fasti::obliquity_series(&centuries, fasti::ObliquityModel::Accurate).collect();
    assert!(eps[0].1 > eps[1].1 && eps[1].1 > eps[2].1);
}

#[cfg(feature = "serde")]
#[test]
fn serde_civil_date_validates_on_the_way_in() {
    let date = GregorianDate::new(2024, Month::March, 31.5).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":"March","day":31.5}"#);
    let back: GregorianDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);

    let bad = r#"{"year":2023,"month":"February","day":29.0}"#;
    assert!(serde_json::from_str::<GregorianDate>(bad).is_err());

    let moslem = MoslemDate::new(1445, MoslemMonth::Muharram, 1).unwrap();
    let json = serde_json::to_string(&moslem).unwrap();
    assert_eq!(serde_json::from_str::<MoslemDate>(&json).unwrap(), moslem);
}

/// Maps a uniform seed onto `1..=days_in_month`.
fn day_within(seed: u8, days_in_month: u8) -> u8 {
    1 + seed % days_in_month
}

proptest! {
    #[test]
    fn gregorian_roundtrip(
        year in 1583i32..=4000,
        month in 1i32..=12,
        seed in 0u8..31,
        fraction in 0.0f64..0.99,
    ) {
        let month_enum = Month::from_number(month).unwrap();
        let day = day_within(seed, GregorianDate::days_in_month(year, month_enum));
        let date = GregorianDate::from_ymd(year, month, f64::from(day) + fraction).unwrap();
        let back = date.to_jd().to_gregorian().unwrap();
        prop_assert_eq!(back.year(), year);
        prop_assert_eq!(back.month(), date.month());
        prop_assert_eq!(back.day_of_month(), day);
        prop_assert!((back.day_fraction() - fraction).abs() < 1e-6);
    }

    #[test]
    fn julian_roundtrip(
        year in -4712i32..=4000,
        month in 1i32..=12,
        seed in 0u8..31,
    ) {
        let month_enum = Month::from_number(month).unwrap();
        let day = day_within(seed, JulianDate::days_in_month(year, month_enum));
        let date = JulianDate::from_ymd(year, month, f64::from(day)).unwrap();
        prop_assert_eq!(date.to_jd().to_julian().unwrap(), date);
    }

    #[test]
    fn to_jd_is_monotonic(
        a in (1i32..=4000, 1i32..=12, 1u8..=28),
        b in (1i32..=4000, 1i32..=12, 1u8..=28),
    ) {
        let da = GregorianDate::from_ymd(a.0, a.1, f64::from(a.2)).unwrap();
        let db = GregorianDate::from_ymd(b.0, b.1, f64::from(b.2)).unwrap();
        prop_assert_eq!(a.cmp(&b), da.to_jd().value().total_cmp(&db.to_jd().value()));
    }

    #[test]
    fn mjd_identity(jd in -1.0e7f64..1.0e7) {
        prop_assert_eq!(JulianDay::new(jd).as_mjd(), jd - 2_400_000.5);
    }

    #[test]
    fn moslem_roundtrip(year in 1i32..=3000, month in 1i32..=12, seed in 0u8..30) {
        let month_enum = MoslemMonth::from_number(month).unwrap();
        let day = day_within(seed, MoslemDate::days_in_month(year, month_enum));
        let date = MoslemDate::from_ymd(year, month, day).unwrap();
        prop_assert_eq!(date.to_jd().to_moslem().unwrap(), date);
        let julian = JulianDate::from_moslem(&date).unwrap();
        prop_assert_eq!(MoslemDate::from_julian(&julian).unwrap(), date);
    }

    #[test]
    fn hebrew_roundtrip(year in 3000i32..=7000, month in 1i32..=13, seed in 0u8..30) {
        // Adar II exists only in leap years.
        let month = if month == 13 && !JewishDate::is_leap_year(year) { 12 } else { month };
        let month_enum = JewishMonth::from_number(month).unwrap();
        let day = day_within(seed, JewishDate::days_in_month(year, month_enum));
        let date = JewishDate::from_ymd(year, month, day).unwrap();
        prop_assert_eq!(date.to_jd().to_jewish().unwrap(), date);
    }
}

#[test]
fn month_ends_roundtrip_in_every_calendar() {
    // Dhu al-Hijjah 30 of a leap year.
    assert!(MoslemDate::is_leap_year(1445));
    let dhu_al_hijjah = MoslemDate::new(1445, MoslemMonth::DhuAlHijjah, 30).unwrap();
    assert_eq!(dhu_al_hijjah.to_jd().to_moslem().unwrap(), dhu_al_hijjah);

    assert!(JewishDate::is_leap_year(5784));
    let adar_ii = JewishDate::new(5784, JewishMonth::AdarII, 29).unwrap();
    assert_eq!(adar_ii.to_jd().to_jewish().unwrap(), adar_ii);

    let leap_day = JulianDate::new(1900, Month::February, 29.0).unwrap();
    assert_eq!(leap_day.to_jd().to_julian().unwrap(), leap_day);
    let year_end = GregorianDate::new(2024, Month::December, 31.75).unwrap();
    assert_eq!(year_end.to_jd().to_gregorian().unwrap(), year_end);
}
