use bevy::camera::ScalingMode;
use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::input::DeleteMode;
use crate::voxel::constants::{CELL_SIZE, GROUND_SIZE};
use crate::voxel::{ObjectId, ObjectKind, ObjectSet, PlacedObject};

/// 射线命中结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: Vec3,
    /// 被命中表面的朝外法线
    pub normal: Vec3,
    pub object: ObjectId,
    /// 沿射线的距离
    pub distance: f32,
}

/// 最近一次指针移动时的命中结果
#[derive(Resource, Default)]
pub struct HoverState {
    pub current: Option<Hit>,
}

/// 摄像机视图快照 - 用于把屏幕坐标反投影成射线
#[derive(Debug, Clone, Copy)]
pub struct CameraView {
    pub world_from_view: Mat4,
    pub clip_from_view: Mat4,
}

impl CameraView {
    pub fn new(camera: &Camera, transform: &GlobalTransform) -> Self {
        Self::from_parts(camera.clip_from_view(), transform)
    }

    /// 直接由 `Projection` 组件构造，同一帧内对投影区域的修改立即生效
    ///
    /// 只支持固定尺寸的正交投影
    pub fn from_projection(projection: &Projection, transform: &GlobalTransform) -> Option<Self> {
        let Projection::Orthographic(ortho) = projection else {
            return None;
        };
        let ScalingMode::Fixed { width, height } = ortho.scaling_mode else {
            return None;
        };
        let size = Vec2::new(width, height);
        let origin = size * ortho.viewport_origin;
        let min = -origin * ortho.scale;
        let max = (size - origin) * ortho.scale;
        // 与 bevy 一致使用反向深度
        let clip_from_view = Mat4::orthographic_rh(min.x, max.x, min.y, max.y, ortho.far, ortho.near);
        Some(Self::from_parts(clip_from_view, transform))
    }

    pub fn from_parts(clip_from_view: Mat4, transform: &GlobalTransform) -> Self {
        Self {
            world_from_view: Mat4::from(transform.affine()),
            clip_from_view,
        }
    }

    /// 构造一条穿过 NDC 坐标点的射线
    ///
    /// 起点在近裁剪面上，方向沿摄像机前方；投影矩阵奇异时返回 `None`
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray3d> {
        let det = self.clip_from_view.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let world_from_clip = self.world_from_view * self.clip_from_view.inverse();

        // 深度两端各反投影一个点，不依赖深度是否反向
        let a = world_from_clip.project_point3(ndc.extend(0.0));
        let b = world_from_clip.project_point3(ndc.extend(1.0));
        let delta = b - a;
        if !a.is_finite() || !delta.is_finite() {
            return None;
        }

        let forward = -self.world_from_view.z_axis.truncate();
        let (origin, direction) = if delta.dot(forward) >= 0.0 {
            (a, delta)
        } else {
            (b, -delta)
        };
        let direction = Dir3::new(direction).ok()?;
        Some(Ray3d::new(origin, direction))
    }
}

pub struct RaycastPlugin;

impl Plugin for RaycastPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .add_systems(Update, draw_delete_target_gizmo);
    }
}

/// 把窗口像素坐标（左上角为原点）转换为 [-1, 1] 的 NDC 坐标，y 轴向上
pub fn pointer_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        pointer.x / viewport.x * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// 从指针位置投射射线，返回最近的命中
pub fn project(pointer: Vec2, viewport: Vec2, view: &CameraView, objects: &ObjectSet) -> Option<Hit> {
    let ndc = pointer_to_ndc(pointer, viewport)?;
    let ray = view.ray_through(ndc)?;
    cast_ray(ray, objects)
}

/// 对集合中的每个对象做相交测试，距离相同时先插入的对象优先
pub fn cast_ray(ray: Ray3d, objects: &ObjectSet) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;
    for obj in objects.iter() {
        let Some((distance, normal)) = intersect(ray, obj) else {
            continue;
        };
        if nearest.is_some_and(|hit| hit.distance <= distance) {
            continue;
        }
        nearest = Some(Hit {
            point: ray.get_point(distance),
            normal,
            object: obj.id,
            distance,
        });
    }
    nearest
}

fn intersect(ray: Ray3d, obj: &PlacedObject) -> Option<(f32, Vec3)> {
    match obj.kind {
        ObjectKind::Ground => {
            // 地面只有正面，从下方射来的射线不算命中
            if ray.direction.y >= 0.0 {
                return None;
            }
            let plane = InfinitePlane3d { normal: Dir3::Y };
            let distance = ray.intersect_plane(obj.position, plane)?;
            let local = ray.get_point(distance) - obj.position;
            let half = GROUND_SIZE / 2.0;
            (local.x.abs() <= half && local.z.abs() <= half).then_some((distance, Vec3::Y))
        }
        ObjectKind::Voxel => {
            let aabb = Aabb3d::new(obj.position, Vec3::splat(CELL_SIZE / 2.0));
            let distance = RayCast3d::from_ray(ray, f32::MAX).aabb_intersection_at(&aabb)?;
            let local = ray.get_point(distance) - obj.position;
            Some((distance, face_normal(local)))
        }
    }
}

/// 根据命中点相对方块中心的主轴求出表面法线
fn face_normal(local: Vec3) -> Vec3 {
    let abs = local.abs();
    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::X * local.x.signum()
    } else if abs.y >= abs.z {
        Vec3::Y * local.y.signum()
    } else {
        Vec3::Z * local.z.signum()
    }
}

/// 删除模式下给将被删除的方块描边
fn draw_delete_target_gizmo(
    mut gizmos: Gizmos,
    hover: Res<HoverState>,
    delete_mode: Res<DeleteMode>,
    objects: Res<ObjectSet>,
) {
    if !delete_mode.active() {
        return;
    }
    let Some(hit) = hover.current else {
        return;
    };
    let Some(obj) = objects.get(hit.object).filter(|obj| !obj.is_ground()) else {
        return;
    };
    let transform = Transform::from_translation(obj.position).with_scale(Vec3::splat(CELL_SIZE * 1.02));
    gizmos.cube(transform, Color::srgb(1.0, 0.95, 0.2));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::voxel::constants::{CAMERA_FAR, CAMERA_NEAR};

    pub(crate) const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    /// 正上方俯视 `target` 的正交摄像机，一像素对应一个世界单位
    pub(crate) fn top_down_view(target: Vec3) -> CameraView {
        let transform = Transform::from_translation(target + Vec3::Y * 500.0)
            .looking_at(target, Vec3::NEG_Z);
        let clip_from_view = Mat4::orthographic_rh(
            -VIEWPORT.x / 2.0,
            VIEWPORT.x / 2.0,
            -VIEWPORT.y / 2.0,
            VIEWPORT.y / 2.0,
            CAMERA_FAR,
            CAMERA_NEAR,
        );
        CameraView::from_parts(clip_from_view, &GlobalTransform::from(transform))
    }

    pub(crate) fn screen_center() -> Vec2 {
        VIEWPORT / 2.0
    }

    #[test]
    fn test_pointer_to_ndc_corners() {
        assert_eq!(pointer_to_ndc(Vec2::ZERO, VIEWPORT), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pointer_to_ndc(VIEWPORT, VIEWPORT), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(pointer_to_ndc(VIEWPORT / 2.0, VIEWPORT), Some(Vec2::ZERO));
    }

    #[test]
    fn test_pointer_to_ndc_empty_viewport() {
        assert!(pointer_to_ndc(Vec2::ZERO, Vec2::new(0.0, 600.0)).is_none());
    }

    #[test]
    fn test_ray_starts_on_near_plane_and_points_forward() {
        let view = top_down_view(Vec3::new(12.0, 0.0, 37.0));
        let Some(ray) = view.ray_through(Vec2::ZERO) else {
            panic!("expected a ray");
        };
        assert!(ray.origin.distance(Vec3::new(12.0, 499.0, 37.0)) < 1e-2);
        assert!(ray.direction.as_vec3().distance(Vec3::NEG_Y) < 1e-4);
    }

    #[test]
    fn test_screen_axes_follow_camera() {
        // 右移指针对应 +X，下移指针对应 +Z（摄像机的上方向是 -Z）
        let view = top_down_view(Vec3::ZERO);
        let objects = ObjectSet::new();
        let right = project(Vec2::new(600.0, 300.0), VIEWPORT, &view, &objects).map(|hit| hit.point);
        let down = project(Vec2::new(400.0, 450.0), VIEWPORT, &view, &objects).map(|hit| hit.point);
        assert!(right.is_some_and(|p| p.distance(Vec3::new(200.0, 0.0, 0.0)) < 1e-2));
        assert!(down.is_some_and(|p| p.distance(Vec3::new(0.0, 0.0, 150.0)) < 1e-2));
    }

    #[test]
    fn test_view_from_fixed_orthographic_projection() {
        let target = Vec3::new(12.0, 0.0, 37.0);
        let transform = Transform::from_translation(target + Vec3::Y * 500.0).looking_at(target, Vec3::NEG_Z);
        let projection = Projection::from(OrthographicProjection {
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            scaling_mode: ScalingMode::Fixed {
                width: VIEWPORT.x,
                height: VIEWPORT.y,
            },
            ..OrthographicProjection::default_3d()
        });
        let Some(view) = CameraView::from_projection(&projection, &GlobalTransform::from(transform)) else {
            panic!("expected a view");
        };

        let objects = ObjectSet::new();
        let hit = project(Vec2::new(600.0, 300.0), VIEWPORT, &view, &objects).map(|hit| hit.point);
        assert!(hit.is_some_and(|p| p.distance(Vec3::new(212.0, 0.0, 37.0)) < 1e-2));
    }

    #[test]
    fn test_view_from_other_projection_is_none() {
        let projection = Projection::from(PerspectiveProjection::default());
        assert!(CameraView::from_projection(&projection, &GlobalTransform::IDENTITY).is_none());
    }

    #[test]
    fn test_singular_projection_yields_no_ray() {
        let view = CameraView::from_parts(Mat4::ZERO, &GlobalTransform::IDENTITY);
        assert!(view.ray_through(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_project_hits_ground() {
        let view = top_down_view(Vec3::new(12.0, 0.0, 37.0));
        let objects = ObjectSet::new();

        let Some(hit) = project(screen_center(), VIEWPORT, &view, &objects) else {
            panic!("expected a ground hit");
        };
        assert_eq!(hit.object, ObjectId::GROUND);
        assert_eq!(hit.normal, Vec3::Y);
        assert!(hit.point.distance(Vec3::new(12.0, 0.0, 37.0)) < 1e-2);
    }

    #[test]
    fn test_project_outside_ground_misses() {
        let view = top_down_view(Vec3::new(2000.0, 0.0, 0.0));
        let objects = ObjectSet::new();
        assert!(project(screen_center(), VIEWPORT, &view, &objects).is_none());
    }

    #[test]
    fn test_ground_is_one_sided() {
        let objects = ObjectSet::new();
        let ray = Ray3d::new(Vec3::new(0.0, -10.0, 0.0), Dir3::Y);
        assert!(cast_ray(ray, &objects).is_none());
    }

    #[test]
    fn test_nearest_cube_wins() {
        let view = top_down_view(Vec3::new(12.0, 0.0, 37.0));
        let mut objects = ObjectSet::new();
        let lower = objects.add(ObjectKind::Voxel, Vec3::new(25.0, 25.0, 25.0));
        let upper = objects.add(ObjectKind::Voxel, Vec3::new(25.0, 75.0, 25.0));

        let Some(hit) = project(screen_center(), VIEWPORT, &view, &objects) else {
            panic!("expected a cube hit");
        };
        assert_ne!(hit.object, lower);
        assert_eq!(hit.object, upper);
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.point.y - 100.0).abs() < 1e-2);
    }

    #[test]
    fn test_side_face_normal() {
        let mut objects = ObjectSet::new();
        let cube = objects.add(ObjectKind::Voxel, Vec3::new(25.0, 25.0, 25.0));
        let ray = Ray3d::new(Vec3::new(-100.0, 25.0, 25.0), Dir3::X);

        let Some(hit) = cast_ray(ray, &objects) else {
            panic!("expected a cube hit");
        };
        assert_eq!(hit.object, cube);
        assert_eq!(hit.normal, Vec3::NEG_X);
        assert!((hit.distance - 100.0).abs() < 1e-3);
    }
}
