//! 场景图同步系统
//!
//! 渲染实体完全由 `ObjectSet` 派生：集合里新增的对象在这里生成实体，
//! 集合里已经不存在的对象在这里销毁实体。

use bevy::prelude::*;
use std::collections::HashMap;

use crate::voxel::components::{PreviewCursor, SceneObject};
use crate::voxel::materials::VoxelAssets;
use crate::voxel::objects::{ObjectId, ObjectKind, ObjectSet, PlacedObject};

/// 对象标识到渲染实体的映射
#[derive(Resource, Default)]
pub struct SceneGraphIndex {
    pub entities: HashMap<ObjectId, Entity>,
}

/// 生成预览方块
pub fn spawn_preview_cursor(mut commands: Commands, assets: Res<VoxelAssets>) {
    commands.spawn((
        Mesh3d(assets.cube_mesh.clone()),
        MeshMaterial3d(assets.preview_material.clone()),
        Transform::default(),
        PreviewCursor,
    ));
}

/// 让场景图与 `ObjectSet` 保持一致
pub fn sync_scene_graph(
    mut commands: Commands,
    objects: Res<ObjectSet>,
    assets: Res<VoxelAssets>,
    mut index: ResMut<SceneGraphIndex>,
) {
    if !objects.is_changed() {
        return;
    }

    // 销毁已被移除的对象
    let stale: Vec<ObjectId> = index
        .entities
        .keys()
        .filter(|id| !objects.contains(**id))
        .copied()
        .collect();
    for id in stale {
        if let Some(entity) = index.entities.remove(&id) {
            commands.entity(entity).despawn();
        }
    }

    // 生成新加入的对象
    for obj in objects.iter() {
        if index.entities.contains_key(&obj.id) {
            continue;
        }
        let entity = spawn_object(&mut commands, &assets, obj);
        index.entities.insert(obj.id, entity);
    }
}

fn spawn_object(commands: &mut Commands, assets: &VoxelAssets, obj: &PlacedObject) -> Entity {
    let transform = Transform::from_translation(obj.position);
    match obj.kind {
        // 地面不可见，但仍参与射线检测
        ObjectKind::Ground => commands
            .spawn((
                Mesh3d(assets.ground_mesh.clone()),
                MeshMaterial3d(assets.ground_material.clone()),
                transform,
                Visibility::Hidden,
                SceneObject(obj.id),
            ))
            .id(),
        ObjectKind::Voxel => commands
            .spawn((
                Mesh3d(assets.cube_mesh.clone()),
                MeshMaterial3d(assets.cube_material.clone()),
                transform,
                SceneObject(obj.id),
            ))
            .id(),
    }
}
