//! Countdown to the event start, recomputed every second.

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use gloo_timers::callback::Interval;
use leptos::*;

use crate::{EVENT_NAME, EVENT_START, EVENT_VENUE};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Time left until the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Started,
}

impl Countdown {
    /// Split the distance between two epoch-millisecond instants.
    pub fn until(now_ms: i64, target_ms: i64) -> Self {
        let distance = target_ms - now_ms;
        if distance <= 0 {
            return Countdown::Started;
        }

        Countdown::Running {
            days: distance / DAY_MS,
            hours: (distance % DAY_MS) / HOUR_MS,
            minutes: (distance % HOUR_MS) / MINUTE_MS,
            seconds: (distance % MINUTE_MS) / SECOND_MS,
        }
    }
}

/// Two-digit zero padding; larger values are left as-is.
pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

/// Event start in epoch milliseconds, interpreted in local time.
pub fn event_start_ms() -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(EVENT_START, "%Y-%m-%dT%H:%M:%S").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

#[component]
pub fn CountdownTimer() -> impl IntoView {
    let Some(target) = event_start_ms() else {
        log::error!("Invalid event start: {}", EVENT_START);
        return view! { }.into_view();
    };

    let (now, set_now) = create_signal(Utc::now().timestamp_millis());
    let ticker = Interval::new(1_000, move || set_now.set(Utc::now().timestamp_millis()));
    on_cleanup(move || drop(ticker));

    let countdown = move || Countdown::until(now.get(), target);

    view! {
        <div class="countdown-timer enhanced-countdown">
            {move || match countdown() {
                Countdown::Running { days, hours, minutes, seconds } => view! {
                    <div class="countdown-header">
                        <h3>"🎯 Event Starts In:"</h3>
                    </div>
                    <div class="countdown-display">
                        <div class="countdown-item">
                            <span id="days" class="countdown-number">{pad2(days)}</span>
                            <span class="countdown-label">"Days"</span>
                        </div>
                        <div class="countdown-item">
                            <span id="hours" class="countdown-number">{pad2(hours)}</span>
                            <span class="countdown-label">"Hours"</span>
                        </div>
                        <div class="countdown-item">
                            <span id="minutes" class="countdown-number">{pad2(minutes)}</span>
                            <span class="countdown-label">"Minutes"</span>
                        </div>
                        <div class="countdown-item">
                            <span id="seconds" class="countdown-number">{pad2(seconds)}</span>
                            <span class="countdown-label">"Seconds"</span>
                        </div>
                    </div>
                }
                .into_view(),
                Countdown::Started => view! {
                    <div class="countdown-header started">
                        <h3>"🎉 Event Has Started!"</h3>
                        <p>{EVENT_NAME} " is now live!"</p>
                        <p>"📍 " {EVENT_VENUE}</p>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
    .into_view()
}
