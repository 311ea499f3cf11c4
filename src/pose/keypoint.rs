/// 手の 21 ランドマークインデックス
///
/// 番号は手のランドマーク標準の並び (0=手首, 1-4=親指, 5-8=人差し指,
/// 9-12=中指, 13-16=薬指, 17-20=小指)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const COUNT: usize = 21;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wrist),
            1 => Some(Self::ThumbCmc),
            2 => Some(Self::ThumbMcp),
            3 => Some(Self::ThumbIp),
            4 => Some(Self::ThumbTip),
            5 => Some(Self::IndexMcp),
            6 => Some(Self::IndexPip),
            7 => Some(Self::IndexDip),
            8 => Some(Self::IndexTip),
            9 => Some(Self::MiddleMcp),
            10 => Some(Self::MiddlePip),
            11 => Some(Self::MiddleDip),
            12 => Some(Self::MiddleTip),
            13 => Some(Self::RingMcp),
            14 => Some(Self::RingPip),
            15 => Some(Self::RingDip),
            16 => Some(Self::RingTip),
            17 => Some(Self::PinkyMcp),
            18 => Some(Self::PinkyPip),
            19 => Some(Self::PinkyDip),
            20 => Some(Self::PinkyTip),
            _ => None,
        }
    }
}

/// 単一キーポイント (カメラ空間座標 + 信頼度)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// X座標 (メートル)
    pub x: f32,
    /// Y座標 (メートル)
    pub y: f32,
    /// Z座標 (メートル、視線軸)
    pub z: f32,
    /// 信頼度スコア (0.0〜1.0)
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, z: f32, confidence: f32) -> Self {
        Self { x, y, z, confidence }
    }

    /// 信頼度が閾値以上か
    pub fn is_valid(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    /// 全座標が有限値か (NaN/無限大を弾く)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// 位置ベクトル
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// 2点間のユークリッド距離
    pub fn distance(&self, other: &Keypoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            confidence: 0.0,
        }
    }
}

/// 21キーポイントからなる手のポーズ
///
/// 固定長配列なので「21点未満」という壊れ方は型レベルで起きない。
#[derive(Debug, Clone)]
pub struct HandPose {
    pub keypoints: [Keypoint; HandLandmark::COUNT],
}

impl HandPose {
    pub fn new(keypoints: [Keypoint; HandLandmark::COUNT]) -> Self {
        Self { keypoints }
    }

    /// インデックスでキーポイントを取得
    pub fn get(&self, index: HandLandmark) -> &Keypoint {
        &self.keypoints[index as usize]
    }

    /// 全キーポイントが有限座標を持つか
    pub fn is_finite(&self) -> bool {
        self.keypoints.iter().all(|k| k.is_finite())
    }

    /// 全キーポイントの平均信頼度
    pub fn average_confidence(&self) -> f32 {
        let sum: f32 = self.keypoints.iter().map(|k| k.confidence).sum();
        sum / HandLandmark::COUNT as f32
    }
}

impl Default for HandPose {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); HandLandmark::COUNT],
        }
    }
}
