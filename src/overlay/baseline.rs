use anyhow::{bail, Result};

use crate::overlay::skeleton::REFERENCE_PAIRS;
use crate::pose::HandPose;

/// 基準ペアの本数
pub const REFERENCE_PAIR_COUNT: usize = REFERENCE_PAIRS.len();

/// 深度補正のキャリブレーション状態
///
/// 初期状態は Uncalibrated (補正オフセット常に0)。キャリブレーションで
/// Calibrated に遷移し、再実行は既存ベースラインを完全に置き換える。
#[derive(Debug, Clone, PartialEq)]
pub enum DepthBaseline {
    Uncalibrated,
    Calibrated([f32; REFERENCE_PAIR_COUNT]),
}

impl DepthBaseline {
    /// 現在のポーズからベースライン距離を採取して Calibrated を返す
    ///
    /// 基準距離が有限かつ正でなければエラー (ゼロ距離ベースラインを
    /// 後段の除算に渡さないため)。
    pub fn calibrate(pose: &HandPose) -> Result<Self> {
        let distances = reference_distances(pose);

        for (i, d) in distances.iter().enumerate() {
            if !d.is_finite() || *d <= 0.0 {
                bail!(
                    "no usable pose: reference distance {} is degenerate ({})",
                    i,
                    d
                );
            }
        }

        Ok(Self::Calibrated(distances))
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self, Self::Calibrated(_))
    }

    /// ベースライン距離 (未キャリブレーションなら None)
    pub fn distances(&self) -> Option<&[f32; REFERENCE_PAIR_COUNT]> {
        match self {
            Self::Uncalibrated => None,
            Self::Calibrated(d) => Some(d),
        }
    }
}

impl Default for DepthBaseline {
    fn default() -> Self {
        Self::Uncalibrated
    }
}

/// 基準ペアごとのユークリッド距離 (REFERENCE_PAIRS 順)
pub fn reference_distances(pose: &HandPose) -> [f32; REFERENCE_PAIR_COUNT] {
    let mut distances = [0.0; REFERENCE_PAIR_COUNT];
    for (d, (a, b)) in distances.iter_mut().zip(REFERENCE_PAIRS.iter()) {
        *d = pose.get(*a).distance(pose.get(*b));
    }
    distances
}
