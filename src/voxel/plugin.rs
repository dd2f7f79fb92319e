//! 体素场景插件

use bevy::prelude::*;

use crate::input::EditorSet;
use crate::voxel::materials::setup_assets;
use crate::voxel::objects::ObjectSet;
use crate::voxel::systems::{spawn_preview_cursor, sync_scene_graph, SceneGraphIndex};

/// 体素场景插件 - 注册对象集合、模板资源和场景图同步
pub struct VoxelPlugin;

impl Plugin for VoxelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObjectSet>()
            .init_resource::<SceneGraphIndex>()
            .add_systems(Startup, (setup_assets, spawn_preview_cursor).chain())
            .add_systems(Update, sync_scene_graph.in_set(EditorSet::SceneSync));
    }
}
