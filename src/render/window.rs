use anyhow::Result;
use minifb::{Key, Window, WindowOptions};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::config::{CameraConfig, ViewerConfig};
use crate::overlay::{MeshTransform, OverlayFrame};
use crate::pose::HandPose;

/// 関節の色 (RGB)
pub const JOINT_COLOR: u32 = 0x00FF00; // 緑

/// ボーンの色 (RGB)
pub const BONE_COLOR: u32 = 0xFFFF00; // 黄色

/// 信頼度が低い関節の色 (RGB)
pub const LOW_CONFIDENCE_COLOR: u32 = 0xFF0000; // 赤

/// minifbを使用したオーバーレイビューア
///
/// 本番レンダラーの代替ではなく、パイプライン出力の目視確認用。
/// トランスフォームをピンホール投影してワイヤーフレーム描画する。
pub struct OverlayViewer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    /// 焦点距離 (ピクセル)
    focal: f32,
    /// カメラのZ位置
    camera_z: f32,
    confidence_threshold: f32,
}

impl OverlayViewer {
    /// ウィンドウを作成
    pub fn new(title: &str, viewer: &ViewerConfig, camera: &CameraConfig) -> Result<Self> {
        let window = Window::new(
            title,
            viewer.width,
            viewer.height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        let buffer = vec![0u32; viewer.width * viewer.height];

        // 垂直画角から焦点距離 (ピクセル)
        let focal = viewer.height as f32 / (2.0 * (camera.fov_v_deg.to_radians() / 2.0).tan());

        Ok(Self {
            window,
            buffer,
            width: viewer.width,
            height: viewer.height,
            focal,
            camera_z: camera.position_z,
            confidence_threshold: viewer.confidence_threshold,
        })
    }

    /// ウィンドウが開いているか
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// キーが今フレーム押されたか
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, minifb::KeyRepeat::No)
    }

    /// バッファを塗りつぶす
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// オーバーレイフレームを描画
    ///
    /// ボーン → 関節の順 (関節球を手前に見せる)。関節の色は対応
    /// キーポイントの信頼度で切り替える。
    pub fn draw_overlay(&mut self, frame: &OverlayFrame, pose: &HandPose) {
        for bone in frame.bones.iter() {
            self.draw_bone(bone);
        }

        for (joint, kp) in frame.joints.iter().zip(pose.keypoints.iter()) {
            let color = if kp.is_valid(self.confidence_threshold) {
                JOINT_COLOR
            } else {
                LOW_CONFIDENCE_COLOR
            };
            self.draw_joint(joint, color);
        }
    }

    /// バッファをウィンドウに表示
    pub fn update(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }

    /// ワールド座標 → スクリーン座標 (カメラより奥の点のみ Some)
    fn project(&self, p: &[f32; 3]) -> Option<(i32, i32, f32)> {
        let depth = p[2] - self.camera_z;
        if depth <= 1e-3 {
            return None;
        }
        let sx = self.width as f32 / 2.0 + self.focal * p[0] / depth;
        let sy = self.height as f32 / 2.0 - self.focal * p[1] / depth;
        Some((sx as i32, sy as i32, depth))
    }

    fn draw_joint(&mut self, t: &MeshTransform, color: u32) {
        if let Some((x, y, depth)) = self.project(&t.translation) {
            // 球半径を投影してピクセル半径に
            let r = (self.focal * t.scale[0] / depth) as i32;
            self.draw_circle(x, y, r.max(1), color);
        }
    }

    fn draw_bone(&mut self, t: &MeshTransform) {
        // トランスフォームからボーン両端を復元: 中点 ± 回転(+Y * 半長)
        let q = UnitQuaternion::from_quaternion(Quaternion::new(
            t.rotation[3],
            t.rotation[0],
            t.rotation[1],
            t.rotation[2],
        ));
        let half_axis = q * Vector3::new(0.0, t.scale[1], 0.0);
        let center = Vector3::from(t.translation);
        let p1 = center - half_axis;
        let p2 = center + half_axis;

        let s1 = self.project(&[p1.x, p1.y, p1.z]);
        let s2 = self.project(&[p2.x, p2.y, p2.z]);
        if let (Some((x1, y1, _)), Some((x2, y2, _))) = (s1, s2) {
            self.draw_line(x1, y1, x2, y2, BONE_COLOR);
        }
    }

    /// Bresenhamのアルゴリズムで線を描画
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 円を描画（塗りつぶし）
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// ピクセルをセット（境界チェック付き）
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize * self.width + x as usize] = color;
        }
    }
}
