use clockface::{AnalogClockAdapter, ClockError, DigitalClock};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClockError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut adapter = AnalogClockAdapter::default();
    println!("face: {}", adapter.face());
    println!("time: {}", adapter.get_date_time()?);

    println!();

    adapter.set_now();
    println!("face: {}", adapter.face());
    println!("time: {}", adapter.get_date_time()?);
    Ok(())
}
