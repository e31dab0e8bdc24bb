//! Global simulation clock.

use bevy::prelude::*;

/// Nominal per-refresh increment of the phase counter. The simulation
/// advances by a fixed step per frame callback rather than by measured
/// elapsed time, so playback speed follows the display refresh rate.
pub const TICK_STEP: f32 = 0.01;

/// Global clock resource: a user-adjustable multiplier applied to every
/// per-frame increment, and a monotonically increasing phase counter used
/// by periodic effects such as the sun's glow pulse.
#[derive(Resource)]
pub struct SimulationClock {
    pub time_scale: f32,
    pub tick: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            tick: 0.0,
        }
    }
}

/// System to advance the phase counter by the scaled nominal step
pub fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.tick += TICK_STEP * clock.time_scale;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clock_runs_at_unit_scale() {
        let clock = SimulationClock::default();
        assert_eq!(clock.time_scale, 1.0);
        assert_eq!(clock.tick, 0.0);
    }

    #[test]
    fn tick_advances_by_scaled_step() {
        let mut app = App::new();
        app.init_resource::<SimulationClock>();
        app.add_systems(Update, advance_clock);

        for _ in 0..10 {
            app.update();
        }
        let tick = app.world().resource::<SimulationClock>().tick;
        assert!((tick - 10.0 * TICK_STEP).abs() < 1e-6);

        app.world_mut().resource_mut::<SimulationClock>().time_scale = 0.0;
        app.update();
        let paused = app.world().resource::<SimulationClock>().tick;
        assert_eq!(paused, tick);
    }
}
