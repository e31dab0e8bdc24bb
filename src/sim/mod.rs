//! Simulation module
//!
//! Owns the global clock and the per-frame motion integrator that drives
//! every body in the scene.

use bevy::prelude::*;

pub mod clock;
pub mod motion;

pub use clock::{SimulationClock, advance_clock};
pub use motion::{
    Ballistic, CircularOrbit, EllipticalOrbit, FaceOrbitCenter, FaceTravel, FreeRoam, Lifetime,
    OrbitAnchor, OrbitCenter, Spin, Tumble, VerticalBob, circular_position, elliptical_position,
};

/// Update-schedule phases. Motion integration reads the clock advanced in
/// `Clock`; trail recording, camera follow and visual effects read the
/// transforms written in `Integrate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Clock,
    Integrate,
    PostIntegrate,
}

/// Plugin for the clock and motion integration
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .configure_sets(
                Update,
                (SimSet::Clock, SimSet::Integrate, SimSet::PostIntegrate).chain(),
            )
            .add_systems(Update, advance_clock.in_set(SimSet::Clock))
            .add_systems(
                Update,
                (
                    motion::update_circular_orbits,
                    // Moon and station read their parent planet's transform,
                    // so planets must already be placed this frame.
                    motion::update_parented_orbits.after(motion::update_circular_orbits),
                    motion::update_elliptical_orbits,
                    motion::update_ballistic,
                    motion::update_free_roam,
                    motion::update_vertical_bob.after(motion::update_circular_orbits),
                    motion::update_spin,
                    motion::update_tumble,
                )
                    .in_set(SimSet::Integrate),
            );
    }
}
