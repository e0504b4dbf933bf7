use chrono::{NaiveDate, NaiveDateTime};
use clockface::convert::{angle_to_hour, hour_to_angle, minute_to_angle, second_to_angle};
use clockface::{
    AnalogClock, AnalogClockAdapter, AnalogClockFace, ClockAdapter, ClockError, DayPeriod,
    DigitalClock, TimeField,
};
use qtty::Degrees;

fn on_day(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 5)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

#[test]
fn reference_angles() {
    assert_eq!(hour_to_angle(9, 30).value(), 285.0);
    assert_eq!(minute_to_angle(30, 15).value(), 181.5);
    assert_eq!(second_to_angle(15).value(), 90.0);
}

#[test]
fn noon_reads_back_as_twelve() {
    let mut adapter = AnalogClockAdapter::default();
    adapter.set_date_time(on_day(12, 0, 0));

    assert_eq!(adapter.face().hour_angle().value(), 0.0);
    assert_eq!(adapter.face().day_period(), DayPeriod::PM);
    assert_eq!(angle_to_hour(Degrees::new(0.0), DayPeriod::PM), 12);
    assert_eq!(adapter.get_date_time(), Ok(on_day(12, 0, 0)));
}

#[test]
fn period_flips_at_midday() {
    let mut adapter = AnalogClockAdapter::default();
    adapter.set_date_time(on_day(11, 59, 59));
    assert_eq!(adapter.face().day_period(), DayPeriod::AM);
    adapter.set_date_time(on_day(12, 0, 0));
    assert_eq!(adapter.face().day_period(), DayPeriod::PM);
}

#[test]
fn every_second_of_a_day_roundtrips_through_the_adapter() {
    let mut adapter = AnalogClockAdapter::default();
    for hour in 0..24 {
        for minute in 0..60 {
            for second in 0..60 {
                let dt = on_day(hour, minute, second);
                adapter.set_date_time(dt);
                assert_eq!(adapter.get_date_time(), Ok(dt));
            }
        }
    }
}

#[test]
fn adapter_over_borrowed_clock_leaves_state_with_owner() {
    let mut clock = AnalogClock::new();
    {
        let mut adapter = ClockAdapter::new(&mut clock);
        adapter.set_date_time(on_day(15, 45, 10));
    }
    assert_eq!(clock.year(), 2024);
    assert_eq!(clock.hour_angle().value(), 112.5);
    assert_eq!(clock.minute_angle().value(), 271.0);
    assert_eq!(clock.second_angle().value(), 60.0);
    assert_eq!(clock.day_period(), DayPeriod::PM);

    let reader = ClockAdapter::new(&mut clock);
    assert_eq!(reader.get_date_time(), Ok(on_day(15, 45, 10)));
}

#[test]
fn fresh_adapter_reads_the_epoch() {
    let adapter = AnalogClockAdapter::default();
    let epoch = NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(adapter.get_date_time(), Ok(epoch));
}

#[test]
fn garbage_written_to_the_face_is_reported_on_read() {
    let mut clock = AnalogClock::new();
    clock.set(
        2024,
        11,
        5,
        Degrees::new(400.0),
        Degrees::new(0.0),
        Degrees::new(0.0),
        DayPeriod::PM,
    );
    // floor(400 / 30) = 13, plus 12 for PM.
    assert_eq!(
        ClockAdapter::new(clock).get_date_time(),
        Err(ClockError::InvalidTimeValue {
            field: TimeField::Hour,
            value: 25,
            min: 0,
            max: 23,
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_clock_roundtrips_through_json() {
    let mut adapter = AnalogClockAdapter::default();
    adapter.set_date_time(on_day(9, 30, 15));
    let json = serde_json::to_string(adapter.face()).unwrap();
    let clock: AnalogClock = serde_json::from_str(&json).unwrap();
    assert_eq!(ClockAdapter::new(clock).get_date_time(), Ok(on_day(9, 30, 15)));
}
