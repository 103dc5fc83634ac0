use chrono::Utc;
use tempora::{Duration, Epoch, Instant, IntervalBoundary, Period, PeriodSet};

fn main() -> tempora::Result<()> {
    let now = Instant::from_datetime(&Utc::now());
    let day = Period::new(now - Duration::days(1), now);

    println!("UNIX: {}", now.timestamp(Epoch::Unix)?);
    println!("GPS:  {}", now.timestamp(Epoch::Gps)?);
    println!("TAI:  {}", now.timestamp(Epoch::Tai)?);

    let busy: PeriodSet = day
        .subdivide_forward(Duration::hours(6), IntervalBoundary::Closed)?
        .step_by(2)
        .collect();
    for gap in busy.gaps() {
        println!("free: {gap}");
    }
    Ok(())
}
