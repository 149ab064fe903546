use chrono::Utc;
use fasti::{easter_table, mean_obliquity, Computus, GregorianDate, JulianDay, SampleGrid, MJD};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), fasti::CalendarError> {
    // `RUST_LOG=fasti=debug` shows the batch diagnostics.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fasti=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let today = GregorianDate::from_utc(Utc::now())?;
    let jd: JulianDay = today.to_jd();

    println!("Gregorian: {today} ({})", today.weekday());
    println!("Julian:    {}", jd.to_julian()?);
    println!("Moslem:    {}", jd.to_moslem()?);
    println!("Hebrew:    {}", jd.to_jewish()?);
    println!("{jd}  /  {}", jd.to::<MJD>());
    println!("ΔT:        {}", jd.delta_t());
    println!("ε₀:        {}", mean_obliquity(jd));

    let year = today.year();
    for pair in easter_table(year..=year + 4, Computus::Gregorian)
        .zip(easter_table(year..=year + 4, Computus::Julian))
    {
        let (western, orthodox) = (pair.0?, pair.1?);
        let orthodox_gregorian = orthodox.jd.to_gregorian()?;
        println!(
            "Easter {}: {} {} / {} {}",
            western.year,
            western.month,
            western.day,
            orthodox_gregorian.month(),
            orthodox_gregorian.day_of_month()
        );
    }

    let grid = SampleGrid::new(1620.0, 2020.0, 9)?;
    for (year, dt) in fasti::delta_t_series(&grid) {
        println!("ΔT({year:.0}) = {dt}");
    }

    Ok(())
}
