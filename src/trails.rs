//! Trail recorder: bounded recent-position history for tracked bodies
//! (station, comet, ships), drawn as a gizmo line strip each frame.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::sim::SimSet;

/// Bounded FIFO of recent positions, newest last. Purely derived state;
/// the transform remains the source of truth.
#[derive(Component)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
    pub color: Color,
}

impl Trail {
    pub fn new(capacity: usize, color: Color) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            color,
        }
    }

    /// Append a position, evicting the oldest entry on overflow.
    pub fn record(&mut self, position: Vec3) {
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rebuild a capacity-length buffer from the history, padding unused
    /// tail slots with the last known point so stale geometry is never
    /// drawn, and return the number of valid leading entries.
    pub fn packed(&self) -> (Vec<Vec3>, usize) {
        let valid = self.points.len();
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend(self.points.iter().copied());
        let pad = self.points.back().copied().unwrap_or(Vec3::ZERO);
        buffer.resize(self.capacity, pad);
        (buffer, valid)
    }
}

/// System to append the current position of every tracked body
pub fn record_trails(mut trails: Query<(&Transform, &mut Trail)>) {
    for (transform, mut trail) in &mut trails {
        trail.record(transform.translation);
    }
}

/// System to draw each trail as a line strip restricted to its valid range
pub fn draw_trails(trails: Query<&Trail>, mut gizmos: Gizmos) {
    for trail in &trails {
        let (buffer, valid) = trail.packed();
        if valid < 2 {
            continue;
        }
        gizmos.linestrip(buffer[..valid].iter().copied(), trail.color);
    }
}

/// Plugin for trail recording and rendering
pub struct TrailsPlugin;

impl Plugin for TrailsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (record_trails, draw_trails.after(record_trails)).in_set(SimSet::PostIntegrate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> Vec3 {
        Vec3::new(i as f32, 0.0, -(i as f32))
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut trail = Trail::new(8, Color::WHITE);
        for i in 0..100 {
            trail.record(sample(i));
            assert!(trail.len() <= 8);
        }
    }

    #[test]
    fn overflow_keeps_most_recent_in_insertion_order() {
        let capacity = 8;
        let mut trail = Trail::new(capacity, Color::WHITE);
        for i in 0..capacity + 5 {
            trail.record(sample(i));
        }

        let (buffer, valid) = trail.packed();
        assert_eq!(valid, capacity);
        for (slot, i) in (5..capacity + 5).enumerate() {
            assert_eq!(buffer[slot], sample(i));
        }
    }

    #[test]
    fn packed_pads_tail_with_last_point() {
        let mut trail = Trail::new(6, Color::WHITE);
        trail.record(sample(0));
        trail.record(sample(1));
        trail.record(sample(2));

        let (buffer, valid) = trail.packed();
        assert_eq!(buffer.len(), 6);
        assert_eq!(valid, 3);
        for slot in valid..6 {
            assert_eq!(buffer[slot], sample(2));
        }
    }

    #[test]
    fn empty_trail_packs_to_origin_padding() {
        let trail = Trail::new(4, Color::WHITE);
        let (buffer, valid) = trail.packed();
        assert_eq!(valid, 0);
        assert_eq!(buffer, vec![Vec3::ZERO; 4]);
    }

    #[test]
    fn recording_system_appends_each_frame() {
        let mut app = App::new();
        app.add_systems(Update, record_trails);

        let tracked = app
            .world_mut()
            .spawn((
                Transform::from_xyz(1.0, 2.0, 3.0),
                Trail::new(16, Color::WHITE),
            ))
            .id();

        app.update();
        app.update();
        app.update();

        let trail = app.world().get::<Trail>(tracked).unwrap();
        assert_eq!(trail.len(), 3);
        let (buffer, _) = trail.packed();
        assert_eq!(buffer[0], Vec3::new(1.0, 2.0, 3.0));
    }
}
