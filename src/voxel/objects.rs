//! 场景对象集合
//!
//! `ObjectSet` 是场景中所有可被射线命中对象的唯一数据来源，
//! 渲染用的实体由 `sync_scene_graph` 根据它派生。

use bevy::prelude::*;

/// 场景对象标识 - 按身份比较，而不是按位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// 地面平面的固定标识
    pub const GROUND: ObjectId = ObjectId(0);
}

/// 对象种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// 不可见的地面平面，永远不会被移除
    Ground,
    /// 用户放置的方块
    Voxel,
}

/// 一个已放置的对象
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// 对象中心的世界坐标
    pub position: Vec3,
}

impl PlacedObject {
    pub fn is_ground(&self) -> bool {
        self.kind == ObjectKind::Ground
    }
}

/// 有序对象集合，按插入顺序保存
#[derive(Resource, Debug, Clone)]
pub struct ObjectSet {
    objects: Vec<PlacedObject>,
    next_id: u64,
}

impl Default for ObjectSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectSet {
    /// 创建只包含地面的集合
    pub fn new() -> Self {
        Self {
            objects: vec![PlacedObject {
                id: ObjectId::GROUND,
                kind: ObjectKind::Ground,
                position: Vec3::ZERO,
            }],
            next_id: 1,
        }
    }

    /// 追加一个对象，返回它的新标识
    pub fn add(&mut self, kind: ObjectKind, position: Vec3) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(PlacedObject { id, kind, position });
        id
    }

    /// 按身份移除对象
    ///
    /// 对象不存在或是地面时不做任何修改，返回 `None`
    pub fn remove(&mut self, id: ObjectId) -> Option<PlacedObject> {
        if id == ObjectId::GROUND {
            return None;
        }
        let index = self.objects.iter().position(|obj| obj.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// 用户放置的方块数量（不含地面）
    pub fn voxel_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|obj| obj.kind == ObjectKind::Voxel)
            .count()
    }
}
