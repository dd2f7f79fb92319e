use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::input::EditorSet;
use crate::render::RenderDriver;
use crate::voxel::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_START};

#[derive(Component)]
pub struct EditorCamera;

/// 当前视口尺寸（逻辑像素）
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// 更新尺寸，零面积（窗口最小化）时忽略并返回 false
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// 一像素对应一个世界单位的正交投影区域
    pub fn scaling_mode(&self) -> ScalingMode {
        ScalingMode::Fixed {
            width: self.width,
            height: self.height,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, apply_resize.in_set(EditorSet::Modifiers));
    }
}

fn setup_camera(mut commands: Commands, mut viewport: ResMut<Viewport>, windows: Query<&Window, With<PrimaryWindow>>) {
    if let Ok(window) = windows.single() {
        viewport.resize(window.width(), window.height());
    } else {
        warn!("No primary window found, using default viewport {}x{}", viewport.width, viewport.height);
    }

    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            scaling_mode: viewport.scaling_mode(),
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        EditorCamera,
    ));
}

/// 窗口尺寸变化：用新的尺寸重新计算正交投影
pub(crate) fn apply_resize(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    mut projection_q: Query<&mut Projection, With<EditorCamera>>,
    mut render: RenderDriver,
) {
    let primary = primary.single().ok();
    let Some(event) = resized
        .read()
        .filter(|event| primary.is_none_or(|window| event.window == window))
        .last()
    else {
        return;
    };
    if !viewport.resize(event.width, event.height) {
        return;
    }

    for mut projection in &mut projection_q {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = viewport.scaling_mode();
        }
    }
    info!(
        "Viewport resized to {}x{} (aspect {:.3})",
        viewport.width,
        viewport.height,
        viewport.aspect()
    );
    render.render();
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::render::tests::{redraws, track_redraws};

    #[test]
    fn test_resize_updates_aspect() {
        let mut viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        assert!(viewport.resize(1024.0, 768.0));
        assert_eq!(viewport.size(), Vec2::new(1024.0, 768.0));
        assert_eq!(viewport.aspect(), 1024.0 / 768.0);
    }

    #[test]
    fn test_zero_size_resize_ignored() {
        let mut viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        assert!(!viewport.resize(0.0, 0.0));
        assert_eq!(viewport.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_resize_message_updates_projection() {
        let mut app = App::new();
        track_redraws(&mut app);
        app.add_message::<WindowResized>()
            .insert_resource(Viewport {
                width: 800.0,
                height: 600.0,
            })
            .add_systems(Update, apply_resize);

        let camera = app
            .world_mut()
            .spawn((
                Projection::from(OrthographicProjection {
                    scaling_mode: ScalingMode::Fixed {
                        width: 800.0,
                        height: 600.0,
                    },
                    ..OrthographicProjection::default_3d()
                }),
                EditorCamera,
            ))
            .id();
        let window = app.world_mut().spawn_empty().id();

        app.world_mut().write_message(WindowResized {
            window,
            width: 1024.0,
            height: 768.0,
        });
        app.update();

        let viewport = *app.world().resource::<Viewport>();
        assert_eq!(viewport.aspect(), 1024.0 / 768.0);
        assert_eq!(redraws(&app), 1);

        let Some(Projection::Orthographic(ortho)) = app.world().get::<Projection>(camera) else {
            panic!("expected an orthographic projection");
        };
        assert!(matches!(
            ortho.scaling_mode,
            ScalingMode::Fixed { width, height } if width == 1024.0 && height == 768.0
        ));
    }
}
