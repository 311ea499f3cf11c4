use crate::pose::{HandLandmark, HandPose, Keypoint};

/// キーポイント供給元
///
/// 実機では手ポーズ推定器の出力がここに来る。フレームごとに
/// 完結した21点セットを返すこと。手が検出できなければ None。
pub trait KeypointSource {
    fn next_pose(&mut self) -> Option<HandPose>;
}

/// 開いた手のテンプレート座標 (メートル、手首原点、指先が+Y方向)
///
/// 推定器なしでパイプラインを動かすための合成データ用。
const HAND_TEMPLATE: [[f32; 3]; HandLandmark::COUNT] = [
    [0.000, 0.000, 0.0],   // Wrist
    [-0.030, 0.020, 0.0],  // ThumbCmc
    [-0.055, 0.045, 0.0],  // ThumbMcp
    [-0.075, 0.070, 0.0],  // ThumbIp
    [-0.090, 0.095, 0.0],  // ThumbTip
    [-0.025, 0.090, 0.0],  // IndexMcp
    [-0.030, 0.125, 0.0],  // IndexPip
    [-0.032, 0.150, 0.0],  // IndexDip
    [-0.034, 0.170, 0.0],  // IndexTip
    [0.000, 0.095, 0.0],   // MiddleMcp
    [0.000, 0.135, 0.0],   // MiddlePip
    [0.000, 0.165, 0.0],   // MiddleDip
    [0.000, 0.190, 0.0],   // MiddleTip
    [0.025, 0.090, 0.0],   // RingMcp
    [0.028, 0.125, 0.0],   // RingPip
    [0.030, 0.152, 0.0],   // RingDip
    [0.032, 0.172, 0.0],   // RingTip
    [0.045, 0.080, 0.0],   // PinkyMcp
    [0.050, 0.105, 0.0],   // PinkyPip
    [0.053, 0.125, 0.0],   // PinkyDip
    [0.055, 0.143, 0.0],   // PinkyTip
];

/// 合成ハンド
///
/// テンプレートの手を「見かけのスケール」倍して返す。2D由来の推定器が
/// 手の接近・後退を XY の拡大縮小としてしか捉えられない状況を模す。
/// Zは動かない。
pub struct SyntheticHand {
    apparent_scale: f32,
    confidence: f32,
}

impl SyntheticHand {
    pub fn new() -> Self {
        Self {
            apparent_scale: 1.0,
            confidence: 0.9,
        }
    }

    /// 見かけのスケールを設定 (1.0=基準、>1.0=カメラに接近)
    pub fn set_apparent_scale(&mut self, scale: f32) {
        self.apparent_scale = scale;
    }

    pub fn apparent_scale(&self) -> f32 {
        self.apparent_scale
    }

    /// 現在のスケールでポーズを生成
    pub fn pose(&self) -> HandPose {
        let mut keypoints = [Keypoint::default(); HandLandmark::COUNT];
        for (kp, t) in keypoints.iter_mut().zip(HAND_TEMPLATE.iter()) {
            *kp = Keypoint::new(
                t[0] * self.apparent_scale,
                t[1] * self.apparent_scale,
                t[2],
                self.confidence,
            );
        }
        HandPose::new(keypoints)
    }
}

impl Default for SyntheticHand {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypointSource for SyntheticHand {
    fn next_pose(&mut self) -> Option<HandPose> {
        Some(self.pose())
    }
}
