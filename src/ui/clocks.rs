//! Multi-timezone wall clock strip, refreshed once per second.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub struct ZoneClock {
    pub label: &'static str,
    pub zone: Tz,
    pub time: String,
    pub date: String,
}

#[derive(Resource)]
pub struct ClockBoard {
    pub zones: Vec<ZoneClock>,
    timer: Timer,
}

impl Default for ClockBoard {
    fn default() -> Self {
        let zones = [
            ("India", chrono_tz::Asia::Kolkata),
            ("New York", chrono_tz::America::New_York),
            ("Los Angeles", chrono_tz::America::Los_Angeles),
            ("UTC", chrono_tz::UTC),
        ]
        .into_iter()
        .map(|(label, zone)| ZoneClock {
            label,
            zone,
            time: String::new(),
            date: String::new(),
        })
        .collect();
        Self {
            zones,
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Render one instant in a zone as (time, date) display strings.
pub fn format_zone(now: DateTime<Utc>, zone: Tz) -> (String, String) {
    let local = now.with_timezone(&zone);
    (
        local.format("%I:%M:%S %p").to_string(),
        local.format("%a, %b %-d").to_string(),
    )
}

/// System to refresh the clock strings once per second (and on the first
/// frame, so the strip never shows blanks)
pub fn tick_clocks(time: Res<Time>, mut board: ResMut<ClockBoard>) {
    board.timer.tick(time.delta());
    let fresh = board.zones.iter().any(|zone| zone.time.is_empty());
    if !board.timer.just_finished() && !fresh {
        return;
    }
    let now = Utc::now();
    for zone in &mut board.zones {
        let (time, date) = format_zone(now, zone.zone);
        zone.time = time;
        zone.date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn utc_formatting_is_twelve_hour() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 23, 15, 5, 9).unwrap();
        let (time, date) = format_zone(instant, chrono_tz::UTC);
        assert_eq!(time, "03:05:09 PM");
        assert_eq!(date, "Sun, Aug 23");
    }

    #[test]
    fn half_hour_offset_zone_is_exact() {
        // Kolkata is UTC+5:30.
        let instant = Utc.with_ymd_and_hms(2026, 8, 23, 15, 5, 9).unwrap();
        let (time, _) = format_zone(instant, chrono_tz::Asia::Kolkata);
        assert_eq!(time, "08:35:09 PM");
    }

    #[test]
    fn zones_differ_for_the_same_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 23, 15, 5, 9).unwrap();
        let (new_york, _) = format_zone(instant, chrono_tz::America::New_York);
        let (los_angeles, _) = format_zone(instant, chrono_tz::America::Los_Angeles);
        assert_ne!(new_york, los_angeles);
    }

    #[test]
    fn board_defaults_to_four_zones() {
        let board = ClockBoard::default();
        assert_eq!(board.zones.len(), 4);
        assert!(board.zones.iter().any(|zone| zone.label == "UTC"));
    }
}
