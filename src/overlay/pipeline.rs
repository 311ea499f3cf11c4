use anyhow::{bail, Result};

use crate::config::CameraConfig;
use crate::overlay::baseline::DepthBaseline;
use crate::overlay::geometry::{bone_transform, joint_transform, MeshTransform};
use crate::overlay::skeleton::BONE_PAIRS;
use crate::overlay::{depth, scale};
use crate::pose::{HandLandmark, HandPose};

/// 1フレーム分のオーバーレイ出力
///
/// 関節21球 + ボーン22円柱。レンダラーはこれをそのまま消費する。
#[derive(Debug, Clone)]
pub struct OverlayFrame {
    pub joints: Vec<MeshTransform>,
    pub bones: Vec<MeshTransform>,
}

/// フレーム同期のオーバーレイ計算パイプライン
///
/// 状態はカメラZ位置 (セッション中不変) とキャリブレーション状態のみ。
/// シングルスレッドのフレームループから使う前提でロックは持たない。
pub struct OverlayPipeline {
    camera_z: f32,
    baseline: DepthBaseline,
}

impl OverlayPipeline {
    pub fn new(camera_z: f32) -> Self {
        Self {
            camera_z,
            baseline: DepthBaseline::Uncalibrated,
        }
    }

    /// 設定から作成
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.position_z)
    }

    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_calibrated()
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    /// 現在のポーズでベースラインを採取する
    ///
    /// 再実行は前回のベースラインを完全に置き換える。
    pub fn calibrate(&mut self, pose: &HandPose) -> Result<()> {
        self.baseline = DepthBaseline::calibrate(pose)?;
        Ok(())
    }

    /// 現在フレームのスケール推定値 (未キャリブレーションなら None)
    pub fn estimate_scale(&self, pose: &HandPose) -> Option<f32> {
        self.baseline
            .distances()
            .map(|b| scale::estimate_scale(pose, b))
    }

    /// 現在フレームの深度オフセット
    ///
    /// 未キャリブレーションなら常に 0 (補正なし、生のZをそのまま使う)。
    pub fn depth_offset(&self, pose: &HandPose) -> f32 {
        match self.estimate_scale(pose) {
            None => 0.0,
            Some(s) => depth::depth_offset(s, self.camera_z),
        }
    }

    /// フレームパス: ポーズ → 配置トランスフォーム一式
    ///
    /// 深度オフセットはZ成分のみに一律加算される。非有限座標の
    /// ポーズはエラーで弾く (そのフレームはスキップ、状態は保持)。
    pub fn process(&self, pose: &HandPose) -> Result<OverlayFrame> {
        if !pose.is_finite() {
            bail!("keypoints contain non-finite coordinates, skipping frame");
        }

        let offset = self.depth_offset(pose);

        let mut joints = Vec::with_capacity(HandLandmark::COUNT);
        for kp in pose.keypoints.iter() {
            joints.push(joint_transform([kp.x, kp.y, kp.z + offset]));
        }

        let mut bones = Vec::with_capacity(BONE_PAIRS.len());
        for (a, b) in BONE_PAIRS.iter() {
            let p1 = pose.get(*a);
            let p2 = pose.get(*b);
            bones.push(bone_transform(
                [p1.x, p1.y, p1.z + offset],
                [p2.x, p2.y, p2.z + offset],
            ));
        }

        Ok(OverlayFrame { joints, bones })
    }
}
