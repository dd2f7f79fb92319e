//! 场景对象相关组件

use bevy::prelude::*;

use crate::voxel::objects::ObjectId;

/// 场景对象组件 - 把渲染实体和 `ObjectSet` 中的条目关联起来
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneObject(pub ObjectId);

/// 预览方块标记组件
#[derive(Component)]
pub struct PreviewCursor;
