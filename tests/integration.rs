use chrono::{DateTime, Weekday};
use meeus_core::islamic::{from_christian, to_christian};
use meeus_core::{
    delta_t, easter, leap_seconds, CalendarDate, CurveFitting, EventSearch, Interpolator, JulianDate,
    JulianEphemerisDay, KeplerSolver, ModifiedJulianDate, Month, Period, Time, JD, JDE, UT, UTC,
};
use qtty::{Day, Days, Seconds};

#[test]
fn utc_roundtrip_j2000_is_stable() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    let back = jd.to_utc().expect("to_utc");
    let delta_ns = back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
    assert!(delta_ns.abs() < 1_000);
}

#[test]
fn ut_applies_delta_t_near_j2000() {
    let ut = Time::<UT>::new(2_451_545.0);
    let jd: JulianDate = ut.to::<JD>();
    let offset = (jd.quantity() - ut.quantity()).to::<Day>();
    let offset_s = offset.to::<qtty::Second>();
    assert!((offset_s - Seconds::new(63.83)).abs() < Seconds::new(1.0));
}

#[test]
fn calendar_date_to_ephemeris_day() {
    let jde = JulianEphemerisDay::from_calendar(1987, 6, 19.5).unwrap();
    assert_eq!(jde.value(), 2_446_966.0);

    let from_ut = Time::<UT>::from_calendar(1987, 6, 19.5).unwrap().to::<JDE>();
    assert!((from_ut.value() - 2_446_966.000_64).abs() < 1e-5);
}

#[test]
fn redefine_from_a_month_name() {
    let month: Month = "Jan".parse().unwrap();
    let jde = JulianEphemerisDay::J2000
        .redefine(333, month.number(), 27.5)
        .unwrap();
    assert_eq!(jde.value(), 1_842_713.0);
    assert_eq!(jde.to_calendar().calendar(), meeus_core::Calendar::Julian);
}

#[test]
fn leap_second_table_and_utc_scale() {
    assert_eq!(leap_seconds(1983, 7), 12);
    assert_eq!(leap_seconds(1960, 1), 0);

    let utc = Time::<UTC>::from_calendar(2020, 1, 1.0).unwrap();
    let shift = (utc.to::<JDE>().quantity() - utc.quantity()).to::<qtty::Second>();
    assert!((shift - Seconds::new(69.184)).abs() < Seconds::new(1e-4));
}

#[test]
fn delta_t_tracks_history() {
    assert!((delta_t(1990, 1).value() - 56.9).abs() < 1.0);
    assert!(delta_t(1700, 1).value() < 15.0);
    assert!(delta_t(-500, 1).value() > 15_000.0);
}

#[test]
fn modified_julian_date_and_weekday() {
    let jde = JulianEphemerisDay::from_calendar(1858, 11, 17.0).unwrap();
    assert_eq!(jde.to::<meeus_core::MJD>().value(), 0.0);
    assert_eq!(ModifiedJulianDate::new(0.0).to::<JD>().value(), 2_400_000.5);

    let day = JulianEphemerisDay::from_calendar(1954, 6, 30.0).unwrap();
    assert_eq!(day.weekday(), Weekday::Wed);
}

#[test]
fn elapsed_days_between_dates() {
    let a = JulianDate::from_calendar(1910, 4, 20.0).unwrap();
    let b = JulianDate::from_calendar(1986, 2, 9.0).unwrap();
    assert_eq!(b - a, Days::new(27_689.0));
}

#[test]
fn feast_dates() {
    let date = easter(2000).unwrap();
    assert_eq!((date.month(), date.day()), (4, 23.0));
    let date = easter(179).unwrap();
    assert_eq!((date.month(), date.day()), (4, 12.0));
}

#[test]
fn islamic_calendar_roundtrip() {
    let hijri = from_christian(1991, 8, 13).unwrap();
    assert_eq!(hijri.to_string(), "1412-02-02 AH");
    let back = to_christian(hijri.year(), hijri.month(), hijri.day()).unwrap();
    assert_eq!(back, CalendarDate::new(1991, 8, 13.0).unwrap());
}

#[test]
fn kepler_from_a_time_derived_mean_anomaly() {
    // Mean anomaly advancing one degree per day from J2000.
    let t = JulianEphemerisDay::from_calendar(2000, 1, 6.5).unwrap();
    let m = (t - JulianEphemerisDay::J2000).value();
    let solution = KeplerSolver::default().solve_degrees(0.1, m).unwrap();
    assert!((solution.eccentric_anomaly_deg() - 5.554_589).abs() < 1e-6);
    assert!((solution.true_anomaly_deg() - 6.139_762).abs() < 1e-6);
}

#[test]
fn interpolate_tabulated_values() {
    // Meeus example 3.a: the Moon's distance, tabulated daily.
    let table = Interpolator::new(
        [7.0, 8.0, 9.0],
        [0.884_226, 0.877_366, 0.870_531],
    )
    .unwrap();
    assert!((table.evaluate(8.0 + 4.35 / 24.0) - 0.876_125).abs() < 1e-6);
}

#[test]
fn fit_a_trend_to_delta_t() {
    // ΔT grew almost linearly over 1990..2000, by about 0.75 s a year.
    let years: Vec<f64> = (1990..2000).map(f64::from).collect();
    let data = CurveFitting::new(
        years.iter().copied(),
        (1990..2000).map(|y| delta_t(y, 1).value()),
    )
    .unwrap();
    let (slope, _) = data.linear_fitting().unwrap();
    assert!((slope - 0.756).abs() < 0.01, "slope = {slope}");
    assert!(data.correlation_coeff().unwrap() > 0.95);
}

#[test]
fn event_search_on_a_period() {
    let start = JulianEphemerisDay::from_calendar(2024, 1, 1.0).unwrap();
    let period = Period::new(start, start + Days::new(10.0));
    // Vanishes every 2.5 d, first 0.4 d after the start.
    let f = |t: Time<JDE>| (std::f64::consts::PI * ((t - start).value() - 0.4) / 2.5).sin();
    let roots = EventSearch::default()
        .with_step(Days::new(0.5))
        .find_roots_within(period, f)
        .unwrap();
    assert_eq!(roots.len(), 4);
    assert!(((roots[0] - start).value() - 0.4).abs() < 1e-6);
    assert!(((roots[3] - start).value() - 7.9).abs() < 1e-6);
}

#[test]
fn later_instants_never_map_to_earlier_dates() {
    let cutover = meeus_core::GREGORIAN_CUTOVER_JD;
    let mut epochs = vec![0.0, 100_000.5, 1_721_423.5, 2_451_545.0, 2_460_000.25];
    epochs.extend((-8..=8).map(|k| cutover + f64::from(k) * 0.37));
    epochs.extend([cutover - 1e-9, cutover - 0.5, cutover + 1e-9]);

    let key = |t: JulianEphemerisDay| {
        let date = t.to_calendar();
        (date.year(), date.month(), date.day())
    };

    for jd in epochs {
        let t = JulianEphemerisDay::new(jd);
        for step in [1e-9, 1e-7, 1e-3, 0.5, 1.0, 400.0] {
            let later = t + Days::new(step);
            assert!(later > t, "JD {jd} + {step}");
            let (before, after) = (key(t), key(later));
            assert!(
                after.partial_cmp(&before).is_some_and(|o| o.is_ge()),
                "JD {jd} + {step}: {before:?} then {after:?}"
            );
        }
    }
}
