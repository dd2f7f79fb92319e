//! 体素编辑器常量定义

use bevy::prelude::*;

/// 体素网格单元边长（单位：世界坐标）- 同时也是方块的边长
pub const CELL_SIZE: f32 = 50.0;

/// 地面平面边长 - 以原点为中心的正方形
pub const GROUND_SIZE: f32 = 1000.0;

/// 地面网格每条边的分格数
pub const GRID_DIVISIONS: u32 = 20;

/// 摄像机初始位置，朝向世界原点
pub const CAMERA_START: Vec3 = Vec3::new(100.0, 200.0, 400.0);

/// 正交摄像机近/远裁剪面
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

/// 背景色 (#f0f0f0)
pub const BACKGROUND_COLOR: Color = Color::srgb(0.941, 0.941, 0.941);

/// 方块颜色
pub const VOXEL_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// 预览方块颜色（半透明）
pub const PREVIEW_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.5);

/// 地面网格线颜色
pub const GRID_COLOR: Color = Color::srgb(0.55, 0.55, 0.55);
