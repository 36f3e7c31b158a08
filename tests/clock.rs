//! Integration tests for the standalone clock/timer/alarm widget.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use football_tournament_web::{ClockEvent, ClockMode, DigitalClock};

fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 5)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

#[test]
fn timer_finishes_exactly_once() {
    let mut clock = DigitalClock::new();
    clock.set_mode(ClockMode::Timer);
    clock.set_timer(Duration::seconds(90));
    clock.start();

    assert_eq!(clock.tick(at(10, 0, 0)), None);
    assert_eq!(clock.tick(at(10, 1, 0)), None);
    assert_eq!(clock.remaining(), Duration::seconds(30));
    assert_eq!(clock.tick(at(10, 2, 0)), Some(ClockEvent::TimerFinished));
    assert!(!clock.is_running());

    // Later ticks stay quiet until reset.
    assert_eq!(clock.tick(at(10, 3, 0)), None);
    clock.reset();
    assert_eq!(clock.remaining(), Duration::seconds(90));
}

#[test]
fn zero_duration_timer_finishes_on_its_first_tick() {
    let mut clock = DigitalClock::new();
    clock.set_mode(ClockMode::Timer);
    clock.set_timer(Duration::zero());
    clock.start();

    assert_eq!(clock.tick(at(10, 0, 0)), Some(ClockEvent::TimerFinished));
    assert!(!clock.is_running());
    assert_eq!(clock.tick(at(10, 0, 1)), None);
}

#[test]
fn stopped_timer_does_not_count_down() {
    let mut clock = DigitalClock::new();
    clock.set_mode(ClockMode::Timer);
    clock.set_timer(Duration::seconds(60));
    clock.start();
    clock.tick(at(10, 0, 0));
    clock.stop();
    clock.tick(at(10, 5, 0));
    assert_eq!(clock.remaining(), Duration::seconds(60));
}

#[test]
fn alarm_triggers_once_with_its_message() {
    let mut clock = DigitalClock::new();
    clock.set_mode(ClockMode::Alarm);
    clock.set_alarm(NaiveTime::from_hms_opt(10, 30, 0).unwrap(), "Kick-off!");

    assert_eq!(clock.tick(at(10, 29, 59)), None);
    assert_eq!(
        clock.tick(at(10, 30, 0)),
        Some(ClockEvent::AlarmTriggered("Kick-off!".to_string()))
    );
    assert_eq!(clock.tick(at(10, 31, 0)), None);

    // Reset re-arms the configured alarm.
    clock.reset();
    assert_eq!(
        clock.tick(at(10, 45, 0)),
        Some(ClockEvent::AlarmTriggered("Kick-off!".to_string()))
    );
}

#[test]
fn switching_modes_pauses_the_timer() {
    let mut clock = DigitalClock::new();
    clock.set_mode(ClockMode::Timer);
    clock.set_timer(Duration::seconds(60));
    clock.start();
    clock.tick(at(10, 0, 0));

    clock.set_mode(ClockMode::Clock);
    assert!(!clock.is_running());
    assert_eq!(clock.tick(at(10, 10, 0)), None);

    // Back in timer mode the remainder is unchanged.
    clock.set_mode(ClockMode::Timer);
    assert_eq!(clock.remaining(), Duration::seconds(60));
}

#[test]
fn display_follows_the_mode() {
    let mut clock = DigitalClock::new();
    assert_eq!(clock.display(at(9, 5, 7)), "09:05:07");

    clock.set_mode(ClockMode::Timer);
    clock.set_timer(Duration::seconds(3671));
    assert_eq!(clock.display(at(9, 0, 0)), "01:01:11");

    clock.set_mode(ClockMode::Alarm);
    assert_eq!(clock.display(at(9, 0, 0)), "--:--:--");
    clock.set_alarm(NaiveTime::from_hms_opt(18, 45, 0).unwrap(), "Dinner");
    assert_eq!(clock.display(at(9, 0, 0)), "18:45:00");
}
