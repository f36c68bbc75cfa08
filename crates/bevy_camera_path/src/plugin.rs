use bevy::{
    app::{App, FixedUpdate, Plugin},
    ecs::{
        entity::Entity,
        intern::Interned,
        resource::Resource,
        schedule::{IntoScheduleConfigs, ScheduleLabel, SystemSet},
    },
    log::info,
    prelude::{Deref, DerefMut},
    time::{Fixed, Time},
};
use bevy_camera_path_core::{engine::CameraPathEngine, settings::CameraPathSettings};

use crate::systems::advance_camera_paths;

/// Plays camera paths on [`CameraSubject`](crate::subject::CameraSubject) entities
pub struct CameraPathPlugin {
    /// Schedule that advances camera paths, once per run. Should run at
    /// `settings.tick_rate` per second.
    pub schedule: Interned<dyn ScheduleLabel>,
    pub settings: CameraPathSettings,
}

impl Default for CameraPathPlugin {
    fn default() -> Self {
        Self {
            schedule: FixedUpdate.intern(),
            settings: CameraPathSettings::default(),
        }
    }
}

impl CameraPathPlugin {
    pub fn with_settings(settings: CameraPathSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn in_schedule(mut self, schedule: impl ScheduleLabel) -> Self {
        self.schedule = schedule.intern();
        self
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum CameraPathSet {
    /// Delivers this tick's poses and finishes runs that are done
    Advance,
}

/// The camera path engine of the app, keyed by subject entity
#[derive(Resource, Deref, DerefMut, Debug)]
pub struct CameraPaths(pub CameraPathEngine<Entity>);

impl Plugin for CameraPathPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.settings.sanitized();

        if settings.configure_fixed_timestep {
            app.insert_resource(Time::<Fixed>::from_hz(settings.tick_rate));
        }

        info!(
            "Camera paths advance at {} ticks per second",
            settings.tick_rate
        );
        app.insert_resource(CameraPaths(CameraPathEngine::new(settings)));

        app.configure_sets(self.schedule, CameraPathSet::Advance);
        app.add_systems(
            self.schedule,
            advance_camera_paths.in_set(CameraPathSet::Advance),
        );
    }
}
