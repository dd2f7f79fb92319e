//! 模板资源：方块、预览方块和地面共用的网格与材质

use bevy::prelude::*;

use crate::voxel::constants::{CELL_SIZE, GROUND_SIZE, PREVIEW_COLOR, VOXEL_COLOR};

/// 场景模板资源 - 所有方块共享同一份网格和材质句柄
#[derive(Resource, Clone, Default)]
pub struct VoxelAssets {
    pub cube_mesh: Handle<Mesh>,
    pub cube_material: Handle<StandardMaterial>,
    pub preview_material: Handle<StandardMaterial>,
    pub ground_mesh: Handle<Mesh>,
    pub ground_material: Handle<StandardMaterial>,
}

/// 创建模板网格和材质
pub fn setup_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube_mesh = meshes.add(Cuboid::from_length(CELL_SIZE));

    // 漫反射材质，不要高光
    let cube_material = materials.add(StandardMaterial {
        base_color: VOXEL_COLOR,
        perceptual_roughness: 1.0,
        reflectance: 0.0,
        ..default()
    });

    let preview_material = materials.add(StandardMaterial {
        base_color: PREVIEW_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    // Plane3d 默认位于 XZ 平面，法线朝 +Y
    let ground_mesh = meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE));
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::NONE,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.insert_resource(VoxelAssets {
        cube_mesh,
        cube_material,
        preview_material,
        ground_mesh,
        ground_material,
    });
}
