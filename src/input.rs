use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::camera::{EditorCamera, Viewport};
use crate::placement::{on_click, on_hover};
use crate::raycast::{project, CameraView, HoverState};
use crate::render::RenderDriver;
use crate::voxel::{ObjectSet, PreviewCursor};

/// 编辑器系统的执行顺序，保证每帧内按键、指针、场景同步依次进行
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// 按键与窗口尺寸
    Modifiers,
    /// 指针移动（悬停预览）
    PointerMove,
    /// 指针按下（放置/删除）
    PointerDown,
    /// 场景图同步
    SceneSync,
}

/// 删除模式开关 - 仅在按住修饰键时为 true
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMode {
    active: bool,
}

impl DeleteMode {
    /// 由当前按键状态求出开关；窗口失去焦点时 `ButtonInput` 会释放所有按键
    pub fn from_keys(bindings: &DeleteModeKeys, keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            active: keys.any_pressed(bindings.0.iter().copied()),
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }
}

/// 触发删除模式的修饰键
#[derive(Resource, Debug, Clone)]
pub struct DeleteModeKeys(pub Vec<KeyCode>);

impl Default for DeleteModeKeys {
    fn default() -> Self {
        Self(vec![KeyCode::ShiftLeft, KeyCode::ShiftRight])
    }
}

/// 最近一次已知的指针位置（窗口像素坐标，左上角为原点）
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

type EditorCameraQuery<'w, 's> = Query<
    'w,
    's,
    (Option<&'static Camera>, &'static Projection, &'static GlobalTransform),
    With<EditorCamera>,
>;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeleteMode>()
            .init_resource::<DeleteModeKeys>()
            .init_resource::<PointerState>()
            .configure_sets(
                Update,
                (
                    EditorSet::Modifiers,
                    EditorSet::PointerMove,
                    EditorSet::PointerDown,
                    EditorSet::SceneSync,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    track_delete_mode.in_set(EditorSet::Modifiers),
                    handle_pointer_move.in_set(EditorSet::PointerMove),
                    handle_pointer_down.in_set(EditorSet::PointerDown),
                ),
            );
    }
}

fn track_delete_mode(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<DeleteModeKeys>,
    mut delete_mode: ResMut<DeleteMode>,
) {
    if delete_mode.set_if_neq(DeleteMode::from_keys(&bindings, &keys)) {
        debug!("Delete mode: {}", delete_mode.active());
    }
}

/// 优先用 `Projection` 组件求视图，其它投影退回到 `Camera` 上一次计算的矩阵
fn editor_view(camera_q: &EditorCameraQuery) -> Option<CameraView> {
    let (camera, projection, transform) = camera_q.single().ok()?;
    CameraView::from_projection(projection, transform)
        .or_else(|| camera.map(|camera| CameraView::new(camera, transform)))
}

/// 指针移动：投射射线、移动预览方块、重绘
fn handle_pointer_move(
    mut cursor_moves: MessageReader<CursorMoved>,
    mut pointer: ResMut<PointerState>,
    mut hover: ResMut<HoverState>,
    viewport: Res<Viewport>,
    objects: Res<ObjectSet>,
    camera_q: EditorCameraQuery,
    mut preview_q: Query<&mut Transform, With<PreviewCursor>>,
    mut render: RenderDriver,
) {
    for event in cursor_moves.read() {
        pointer.position = Some(event.position);

        let Some(view) = editor_view(&camera_q) else {
            continue;
        };
        let hit = project(event.position, viewport.size(), &view, &objects);
        hover.current = hit;

        if let Some(position) = on_hover(hit.as_ref()) {
            for mut transform in &mut preview_q {
                transform.translation = position;
            }
        }
        render.render();
    }
}

/// 指针按下：按当前模式放置或删除方块，场景有变化时重绘
fn handle_pointer_down(
    mut buttons: MessageReader<MouseButtonInput>,
    pointer: Res<PointerState>,
    viewport: Res<Viewport>,
    delete_mode: Res<DeleteMode>,
    mut objects: ResMut<ObjectSet>,
    camera_q: EditorCameraQuery,
    mut render: RenderDriver,
) {
    for event in buttons.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let Some(position) = pointer.position else {
            continue;
        };
        let Some(view) = editor_view(&camera_q) else {
            continue;
        };
        let hit = project(position, viewport.size(), &view, &objects);
        if on_click(&mut objects, hit.as_ref(), delete_mode.active()).is_some() {
            render.render();
        }
    }
}
