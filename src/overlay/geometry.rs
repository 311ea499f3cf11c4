use nalgebra::{UnitQuaternion, Vector3};

use crate::overlay::skeleton::{BONE_RADIUS, JOINT_RADIUS};

/// レンダラーに渡す配置トランスフォーム
///
/// 平行移動 + 回転 (クォータニオン x, y, z, w) + 非一様スケール。
/// 特定のレンダリングバックエンドに依存しない素の幾何データ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshTransform {
    /// 平行移動 (x, y, z)
    pub translation: [f32; 3],
    /// 回転 (クォータニオン: x, y, z, w)
    pub rotation: [f32; 4],
    /// 軸ごとのスケール
    pub scale: [f32; 3],
}

impl MeshTransform {
    pub fn new(translation: [f32; 3], rotation: [f32; 4], scale: [f32; 3]) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

/// 単位クォータニオン (回転なし)
const IDENTITY_ROTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// 関節球のトランスフォーム
///
/// 位置=キーポイント、回転=単位、スケール=一様な球半径。
pub fn joint_transform(p: [f32; 3]) -> MeshTransform {
    MeshTransform::new(p, IDENTITY_ROTATION, [JOINT_RADIUS; 3])
}

/// ボーン円柱のトランスフォーム
///
/// 位置=両端の中点、回転=+Y単位軸をボーン方向 (p2 - p1) に向けるもの、
/// スケール=(半径, 長さ/2, 半径)。単位円柱がY軸±1に伸びる前提。
pub fn bone_transform(p1: [f32; 3], p2: [f32; 3]) -> MeshTransform {
    let a = Vector3::from(p1);
    let b = Vector3::from(p2);
    let dir = b - a;
    let half_length = dir.norm() / 2.0;

    let center = (a + b) / 2.0;
    let rotation = rotation_from_up(&dir);
    let scale = [BONE_RADIUS, half_length, BONE_RADIUS];

    MeshTransform::new([center.x, center.y, center.z], rotation, scale)
}

/// +Y単位軸を dir に重ねる回転
///
/// dir がゼロなら単位回転、真逆 (-Y) なら一意解がないので
/// X軸まわり180度を採る (円柱は軸対称なのでどの垂直軸でも等価)。
fn rotation_from_up(dir: &Vector3<f32>) -> [f32; 4] {
    if dir.norm() <= f32::EPSILON {
        return IDENTITY_ROTATION;
    }

    let q = UnitQuaternion::rotation_between(&Vector3::y(), dir).unwrap_or_else(|| {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f32::consts::PI)
    });

    [q.i, q.j, q.k, q.w]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    fn approx_eq_3(a: &[f32; 3], b: &[f32; 3], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, eps))
    }

    /// クォータニオンでベクトルを回す (検証用)
    fn rotate(q: &[f32; 4], v: &[f32; 3]) -> [f32; 3] {
        let uq = UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(q[3], q[0], q[1], q[2]));
        let r = uq * Vector3::from(*v);
        [r.x, r.y, r.z]
    }

    #[test]
    fn test_joint_transform() {
        let t = joint_transform([1.0, 2.0, 3.0]);
        assert_eq!(t.translation, [1.0, 2.0, 3.0]);
        assert_eq!(t.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(t.scale, [JOINT_RADIUS, JOINT_RADIUS, JOINT_RADIUS]);
    }

    #[test]
    fn test_bone_along_up_axis() {
        // 2単位のY方向ボーン: 中点(0,1,0)、回転なし、Yスケール=半長1.0
        let t = bone_transform([0.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
        assert!(approx_eq_3(&t.translation, &[0.0, 1.0, 0.0], 1e-6));
        assert!(approx_eq(t.rotation[0], 0.0, 1e-6));
        assert!(approx_eq(t.rotation[1], 0.0, 1e-6));
        assert!(approx_eq(t.rotation[2], 0.0, 1e-6));
        assert!(approx_eq(t.rotation[3].abs(), 1.0, 1e-6));
        assert!(approx_eq(t.scale[1], 1.0, 1e-6));
        assert!(approx_eq(t.scale[0], BONE_RADIUS, 1e-6));
        assert!(approx_eq(t.scale[2], BONE_RADIUS, 1e-6));
    }

    #[test]
    fn test_bone_rotation_maps_up_to_direction() {
        let p1 = [0.1, -0.2, 0.3];
        let p2 = [0.4, 0.5, -0.6];
        let t = bone_transform(p1, p2);

        // 回転で+Yを回すと正規化されたボーン方向になる
        let rotated = rotate(&t.rotation, &[0.0, 1.0, 0.0]);
        let dir = [p2[0] - p1[0], p2[1] - p1[1], p2[2] - p1[2]];
        let len = (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
        let unit = [dir[0] / len, dir[1] / len, dir[2] / len];
        assert!(approx_eq_3(&rotated, &unit, 1e-5));
    }

    #[test]
    fn test_bone_midpoint_and_half_length() {
        let t = bone_transform([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
        assert!(approx_eq_3(&t.translation, &[2.0, 0.0, 0.0], 1e-6));
        assert!(approx_eq(t.scale[1], 1.0, 1e-6));
    }

    #[test]
    fn test_bone_antiparallel_direction() {
        // -Y方向でも有効な回転が返り、+Yが-Yに移る
        let t = bone_transform([0.0, 1.0, 0.0], [0.0, -1.0, 0.0]);
        let rotated = rotate(&t.rotation, &[0.0, 1.0, 0.0]);
        assert!(approx_eq_3(&rotated, &[0.0, -1.0, 0.0], 1e-5));
    }

    #[test]
    fn test_zero_length_bone() {
        let t = bone_transform([0.5, 0.5, 0.5], [0.5, 0.5, 0.5]);
        assert_eq!(t.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert!(approx_eq(t.scale[1], 0.0, 1e-6));
        assert!(approx_eq_3(&t.translation, &[0.5, 0.5, 0.5], 1e-6));
    }
}
