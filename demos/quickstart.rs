use chrono::Utc;
use meeus_core::{easter, islamic, JulianDate, KeplerSolver, Time, JDE, MJD, UT};

fn main() {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_mjd: Time<MJD> = now_jd.to::<MJD>();
    let now_ut: Time<UT> = now_jd.to::<UT>();
    let today = now_jd.to::<JDE>().to_calendar();

    println!("JD(TT): {now_jd}");
    println!("MJD(TT): {now_mjd}");
    println!("UT: {now_ut}");
    println!("ΔT: {}", now_ut.delta_t());
    println!("GMST: {:.6}°", now_ut.mean_sidereal_time());
    println!("Weekday: {:?}", today.weekday());

    if let Ok(date) = easter(today.year()) {
        if let Ok(month) = date.month_name() {
            println!("Easter {}: {} {}", date.year(), month, date.day());
        }
    }
    if let Ok(hijri) = islamic::from_christian(today.year(), today.month(), today.day() as u32) {
        println!("Hijri: {hijri}");
    }
    if let Ok(solution) = KeplerSolver::default().solve_degrees(0.0167, 90.0) {
        println!("Earth at M = 90°: ν = {:.4}°", solution.true_anomaly_deg());
    }
}
