//! 渲染驱动
//!
//! 应用运行在响应式更新模式下，只有输入事件或显式的重绘请求才会产生新的一帧。

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::RequestRedraw;
use bevy::winit::WinitSettings;

/// 请求重绘当前场景
///
/// 无状态、幂等；没有脏标记，调用方在修改场景后自行调用
#[derive(SystemParam)]
pub struct RenderDriver<'w> {
    redraw: MessageWriter<'w, RequestRedraw>,
}

impl RenderDriver<'_> {
    pub fn render(&mut self) {
        self.redraw.write(RequestRedraw);
    }
}

pub struct RenderDriverPlugin;

impl Plugin for RenderDriverPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(WinitSettings::desktop_app())
            .add_systems(Startup, initial_render);
    }
}

fn initial_render(mut render: RenderDriver) {
    render.render();
}
