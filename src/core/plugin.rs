//! CorePlugin wires the scaled scene clock and the per-frame system ordering.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Ordered stages of a single frame. Each stage runs after the previous one
/// finishes, so the present stage only ever observes fully updated state.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSet {
    /// Raw keyboard events become held directions and answer submissions.
    Input,
    Movement,
    /// Scheduled feedback events whose delay elapsed are released.
    Timers,
    Dialogue,
    Animation,
    Fade,
    /// Read-only projection of scene state onto sprites and UI.
    Present,
}

/// Frame delta scaled by a fixed multiplier. Feedback windows are measured
/// against the scaled delta.
#[derive(Resource, Debug)]
pub struct SceneClock {
    time_scale: f32,
    last_scaled_delta: Duration,
}

impl SceneClock {
    /// Non-positive scales are raised to a small positive minimum.
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_scaled_delta: Duration::ZERO,
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    pub fn tick(&mut self, real_delta: Duration) {
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers the scene clock and the frame ordering every other plugin hooks into.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    /// Creates a CorePlugin with the provided time-scale multiplier.
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneClock::new(self.time_scale))
            .configure_sets(
                Update,
                (
                    SceneSet::Input,
                    SceneSet::Movement,
                    SceneSet::Timers,
                    SceneSet::Dialogue,
                    SceneSet::Animation,
                    SceneSet::Fade,
                    SceneSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, log_startup_time_scale)
            .add_systems(Update, update_scene_clock.before(SceneSet::Input));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_scaled_ticks);
        }
    }
}

fn update_scene_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_time_scale(clock: Res<SceneClock>) {
    info!(
        "CorePlugin initialised with time scale: {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SceneClock>) {
    if timer.timer.tick(clock.last_scaled_delta()).just_finished() {
        info!(
            target: "core_debug",
            "scale: {:.3} | scaled dt: {:.4}s",
            clock.time_scale(),
            clock.last_scaled_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_scales_delta_with_multiplier() {
        let mut clock = SceneClock::new(2.5);
        clock.tick(Duration::from_secs_f32(1.2));

        assert_eq!(clock.time_scale(), 2.5);
        assert_eq!(
            clock.last_scaled_delta(),
            Duration::from_secs_f32(1.2).mul_f32(2.5)
        );
    }

    #[test]
    fn each_tick_replaces_the_previous_delta() {
        let mut clock = SceneClock::default();
        clock.tick(Duration::from_millis(1_000));
        clock.tick(Duration::from_millis(2_000));

        assert_eq!(clock.last_scaled_delta(), Duration::from_millis(2_000));
    }

    #[test]
    fn scene_sets_run_in_frame_order() {
        #[derive(Resource, Default)]
        struct Trace(Vec<&'static str>);

        let mut app = App::new();
        app.add_plugins(CorePlugin::default())
            .init_resource::<Trace>()
            .insert_resource(Time::<()>::default())
            .add_systems(
                Update,
                (
                    (|mut t: ResMut<Trace>| t.0.push("present")).in_set(SceneSet::Present),
                    (|mut t: ResMut<Trace>| t.0.push("dialogue")).in_set(SceneSet::Dialogue),
                    (|mut t: ResMut<Trace>| t.0.push("input")).in_set(SceneSet::Input),
                    (|mut t: ResMut<Trace>| t.0.push("fade")).in_set(SceneSet::Fade),
                ),
            );

        app.update();

        let trace = &app.world().resource::<Trace>().0;
        assert_eq!(trace, &vec!["input", "dialogue", "fade", "present"]);
    }

    #[test]
    fn clock_clamps_min_time_scale() {
        let clock = SceneClock::new(0.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);

        let clock = SceneClock::new(-5.0);
        assert!((clock.time_scale() - MIN_TIME_SCALE).abs() < f32::EPSILON);
    }
}
