//! 放置控制：悬停时移动预览方块，点击时放置或删除方块

use bevy::prelude::*;

use crate::raycast::Hit;
use crate::voxel::constants::CELL_SIZE;
use crate::voxel::{ObjectId, ObjectKind, ObjectSet};

/// 一次点击对场景造成的修改
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Added(ObjectId),
    Removed(ObjectId),
}

/// 把坐标吸附到所在网格单元的中心
pub fn snap_to_cell(v: Vec3) -> Vec3 {
    (v / CELL_SIZE).floor() * CELL_SIZE + Vec3::splat(CELL_SIZE / 2.0)
}

/// 新方块的位置：沿被命中表面的法线偏移一个单位后再吸附，
/// 这样新方块紧贴被点击的表面而不是嵌在里面
pub fn placement_position(point: Vec3, normal: Vec3) -> Vec3 {
    snap_to_cell(point + normal)
}

/// 预览方块应处的位置，没有命中时返回 `None`（预览方块保持原位）
pub fn on_hover(hit: Option<&Hit>) -> Option<Vec3> {
    hit.map(|hit| placement_position(hit.point, hit.normal))
}

/// 处理一次点击
///
/// 删除模式下移除被点中的方块（地面永远不会被移除），否则在吸附位置新增方块。
/// 场景没有变化时返回 `None`
pub fn on_click(objects: &mut ObjectSet, hit: Option<&Hit>, delete_mode: bool) -> Option<PlacementOutcome> {
    let hit = hit?;
    if delete_mode {
        if hit.object == ObjectId::GROUND {
            return None;
        }
        let removed = objects.remove(hit.object)?;
        debug!("Removed voxel {:?} at {}", removed.id, removed.position);
        Some(PlacementOutcome::Removed(removed.id))
    } else {
        let position = placement_position(hit.point, hit.normal);
        let id = objects.add(ObjectKind::Voxel, position);
        debug!("Placed voxel {:?} at {}", id, position);
        Some(PlacementOutcome::Added(id))
    }
}
