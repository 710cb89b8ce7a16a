use std::rc::Rc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CLOCK_TICK_MS;
use crate::state::{use_observable, Observable, ReadOnly};

/// An office whose local time is shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hub {
    pub label: &'static str,
    pub zone: Tz,
}

pub const HUBS: [Hub; 3] = [
    Hub { label: "BANGALORE HQ", zone: chrono_tz::Asia::Kolkata },
    Hub { label: "DELHI NCR", zone: chrono_tz::Asia::Kolkata },
    Hub { label: "LOS ANGELES", zone: chrono_tz::America::Los_Angeles },
];

pub fn hub_time(hub: &Hub, now: DateTime<Utc>) -> String {
    now.with_timezone(&hub.zone).format("%H:%M:%S").to_string()
}

/// Owns the wall-clock reading. Display only; nothing schedules off it.
pub struct ClockController {
    now: Observable<DateTime<Utc>>,
}

impl ClockController {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Observable::new(now),
        }
    }

    pub fn tick(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn now(&self) -> ReadOnly<DateTime<Utc>> {
        self.now.reader()
    }

    /// Ticks every `period_ms` until the returned interval is dropped.
    pub fn run(controller: Rc<Self>, period_ms: u32) -> Interval {
        Interval::new(period_ms, move || controller.tick(Utc::now()))
    }
}

#[derive(Clone, PartialEq)]
pub struct WallClock(pub ReadOnly<DateTime<Utc>>);

#[derive(Properties, PartialEq)]
pub struct ClockProviderProps {
    pub children: Children,
}

#[function_component(ClockProvider)]
pub fn clock_provider(props: &ClockProviderProps) -> Html {
    let controller = use_memo(|_| ClockController::new(Utc::now()), ());

    {
        let controller = controller.clone();
        use_effect_once(move || {
            let interval = ClockController::run(controller, CLOCK_TICK_MS);
            move || drop(interval)
        });
    }

    let context = WallClock(controller.now());

    html! {
        <ContextProvider<WallClock> context={context}>
            { for props.children.iter() }
        </ContextProvider<WallClock>>
    }
}

#[function_component(HubClocks)]
pub fn hub_clocks() -> Html {
    let clock = use_context::<WallClock>();
    let detached = use_memo(|_| Observable::new(Utc::now()).reader(), ());
    let source = clock
        .map(|WallClock(now)| now)
        .unwrap_or_else(|| (*detached).clone());
    let now = use_observable(&source);

    html! {
        <div class="hub-list">
            { HUBS.iter().map(|hub| html! {
                <div class="hub">
                    <span>{hub.label}</span>
                    <span class="hub-time">{hub_time(hub, now)}</span>
                </div>
            }).collect::<Html>() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hub_times_follow_zones() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let times: Vec<String> = HUBS.iter().map(|hub| hub_time(hub, now)).collect();
        assert_eq!(times, vec!["05:30:00", "05:30:00", "16:00:00"]);
    }

    #[test]
    fn test_los_angeles_observes_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(hub_time(&HUBS[2], now), "05:00:00");
    }

    #[test]
    fn test_tick_publishes_new_reading() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let controller = ClockController::new(start);
        let reader = controller.now();

        let later = start + chrono::Duration::seconds(1);
        controller.tick(later);

        assert_eq!(reader.get(), later);
    }
}
