use bevy::prelude::*;

use crate::input::DeleteMode;
use crate::voxel::ObjectSet;

const INFO_BG: Color = Color::srgba(0.06, 0.08, 0.12, 0.78);

#[derive(Component)]
pub struct StatusText;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui)
            .add_systems(Update, update_status_text);
    }
}

fn setup_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: px(14.0),
                top: px(14.0),
                padding: UiRect::all(px(10.0)),
                ..default()
            },
            BackgroundColor(INFO_BG),
        ))
        .with_child((
            Text::new(status_line(false, 0)),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::WHITE),
            StatusText,
        ));
}

/// 默认字体不含中文字形，界面文字使用英文
fn status_line(delete_mode: bool, voxels: usize) -> String {
    let mode = if delete_mode { "delete" } else { "place" };
    format!("Mode: {}\nVoxels: {}\nClick to place, Shift+Click to delete", mode, voxels)
}

fn update_status_text(
    delete_mode: Res<DeleteMode>,
    objects: Res<ObjectSet>,
    mut text_q: Query<&mut Text, With<StatusText>>,
) {
    if !delete_mode.is_changed() && !objects.is_changed() {
        return;
    }
    let Ok(mut text) = text_q.single_mut() else {
        return;
    };
    text.0 = status_line(delete_mode.active(), objects.voxel_count());
}
