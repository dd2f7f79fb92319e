mod camera;
mod input;
mod lighting;
mod placement;
mod raycast;
mod render;
mod ui;
mod voxel;

use bevy::prelude::*;
use camera::CameraPlugin;
use input::InputPlugin;
use lighting::LightingPlugin;
use raycast::RaycastPlugin;
use render::RenderDriverPlugin;
use ui::UiPlugin;
use voxel::VoxelPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Voxplace".to_string(),
                // 浏览器中画布填满父元素，并拦截默认的键盘/鼠标行为
                fit_canvas_to_parent: true,
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            VoxelPlugin,
            CameraPlugin,
            LightingPlugin,
            RaycastPlugin,
            InputPlugin,
            RenderDriverPlugin,
            UiPlugin,
        ))
        .add_systems(Startup, print_controls)
        .run();
}

fn print_controls() {
    println!("=== Voxplace Controls ===");
    println!("  Mouse move        - Preview voxel position");
    println!("  Click             - Place voxel");
    println!("  Shift + Click     - Remove voxel");
    info!("Scene ready: ground plane {}x{}", voxel::constants::GROUND_SIZE, voxel::constants::GROUND_SIZE);
}
