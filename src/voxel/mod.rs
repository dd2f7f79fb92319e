//! 体素场景模块
//!
//! - **constants**: 常量定义（网格尺寸、摄像机参数、颜色）
//! - **objects**: 场景对象集合（唯一数据来源）
//! - **components**: 场景对象相关组件
//! - **materials**: 模板网格与材质
//! - **systems**: 场景图同步系统
//! - **plugin**: Bevy插件

pub mod components;
pub mod constants;
pub mod materials;
pub mod objects;
pub mod plugin;
pub mod systems;

pub use components::PreviewCursor;
pub use objects::{ObjectId, ObjectKind, ObjectSet, PlacedObject};
pub use plugin::VoxelPlugin;
