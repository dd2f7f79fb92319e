use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::voxel::constants::{BACKGROUND_COLOR, CELL_SIZE, GRID_COLOR, GRID_DIVISIONS};

/// 灰色环境光 (#606060)
const AMBIENT_COLOR: Color = Color::srgb(0.376, 0.376, 0.376);

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, setup_lights)
            .add_systems(Update, draw_ground_grid);
    }
}

fn setup_lights(mut commands: Commands) {
    // 平行光，方向 (1, 0.75, 0.5) 指向原点
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(1.0, 0.75, 0.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 全局环境光；`AmbientLight` 组件是按摄像机覆盖的，会顺带生成一个摄像机
    commands.insert_resource(GlobalAmbientLight {
        color: AMBIENT_COLOR,
        brightness: 400.0,
        ..default()
    });
}

/// 地面网格：覆盖整个地面，每格一个体素
fn draw_ground_grid(mut gizmos: Gizmos) {
    // 网格默认在 XY 平面，旋转到 XZ 平面
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(GRID_DIVISIONS),
        Vec2::splat(CELL_SIZE),
        GRID_COLOR,
    );
}
