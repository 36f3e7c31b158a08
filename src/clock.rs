//! Digital clock widget: clock, countdown timer, and alarm.
//!
//! Independent of the tournament modules; a host drives it by calling
//! [`DigitalClock::tick`] periodically with the current time and surfaces
//! the returned events however it likes. Rendering is out of scope.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// What the widget is doing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ClockMode {
    /// Display the current time.
    #[default]
    Clock,
    /// Count down from a configured duration.
    Timer,
    /// Fire at a configured wall-clock time with a message.
    Alarm,
}

/// Notifications a host may display. Each fires exactly once per arming.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClockEvent {
    TimerFinished,
    AlarmTriggered(String),
}

/// The widget's state machine.
#[derive(Clone, Debug)]
pub struct DigitalClock {
    mode: ClockMode,
    running: bool,
    timer_set: Duration,
    remaining: Duration,
    alarm_time: Option<NaiveTime>,
    alarm_message: String,
    alarm_armed: bool,
    last_tick: Option<NaiveDateTime>,
}

impl Default for DigitalClock {
    fn default() -> Self {
        Self {
            mode: ClockMode::Clock,
            running: false,
            timer_set: Duration::zero(),
            remaining: Duration::zero(),
            alarm_time: None,
            alarm_message: String::new(),
            alarm_armed: false,
            last_tick: None,
        }
    }
}

impl DigitalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Switch modes. The timer pauses; timer and alarm configuration keep.
    pub fn set_mode(&mut self, mode: ClockMode) {
        self.mode = mode;
        self.running = false;
        self.last_tick = None;
    }

    /// Configure the countdown. Stops the timer and resets the remainder.
    pub fn set_timer(&mut self, duration: Duration) {
        self.timer_set = duration;
        self.remaining = duration;
        self.running = false;
        self.last_tick = None;
    }

    /// Arm the alarm for a wall-clock time with a message.
    pub fn set_alarm(&mut self, time: NaiveTime, message: impl Into<String>) {
        self.alarm_time = Some(time);
        self.alarm_message = message.into();
        self.alarm_armed = true;
    }

    /// Start the countdown (Timer mode; a no-op in the others).
    pub fn start(&mut self) {
        if self.mode == ClockMode::Timer {
            self.running = true;
        }
    }

    /// Pause the countdown.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Reset: countdown back to its configured duration, alarm re-armed.
    pub fn reset(&mut self) {
        self.remaining = self.timer_set;
        self.running = false;
        self.last_tick = None;
        self.alarm_armed = self.alarm_time.is_some();
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the widget to `now`. Returns at most one event: the timer
    /// finishing or the alarm triggering. Subsequent ticks stay quiet
    /// until the widget is reset or re-armed.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<ClockEvent> {
        let event = match self.mode {
            ClockMode::Clock => None,
            ClockMode::Timer => {
                if self.running {
                    let elapsed = match self.last_tick {
                        Some(last) => now - last,
                        None => Duration::zero(),
                    };
                    self.remaining = self.remaining - elapsed;
                    // A zero-duration countdown finishes on its first tick.
                    if self.remaining <= Duration::zero() {
                        self.remaining = Duration::zero();
                        self.running = false;
                        Some(ClockEvent::TimerFinished)
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            ClockMode::Alarm => match self.alarm_time {
                Some(at) if self.alarm_armed && now.time() >= at => {
                    self.alarm_armed = false;
                    Some(ClockEvent::AlarmTriggered(self.alarm_message.clone()))
                }
                _ => None,
            },
        };
        self.last_tick = Some(now);
        event
    }

    /// What the widget would show right now, per mode.
    pub fn display(&self, now: NaiveDateTime) -> String {
        match self.mode {
            ClockMode::Clock => now.format("%H:%M:%S").to_string(),
            ClockMode::Timer => {
                let secs = self.remaining.num_seconds().max(0);
                format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
            }
            ClockMode::Alarm => match self.alarm_time {
                Some(at) => at.format("%H:%M:%S").to_string(),
                None => "--:--:--".to_string(),
            },
        }
    }
}
