use crate::pose::HandLandmark;

use HandLandmark::*;

/// ボーンの接続定義 (開始キーポイント, 終了キーポイント)
///
/// (ThumbCmc, ThumbMcp) は2回含まれる。両方とも独立に描画される。
pub const BONE_PAIRS: [(HandLandmark, HandLandmark); 22] = [
    // 親指
    (Wrist, ThumbCmc),
    (ThumbCmc, ThumbMcp),
    (ThumbCmc, ThumbMcp),
    (ThumbMcp, ThumbIp),
    (ThumbIp, ThumbTip),
    // 人差し指
    (IndexMcp, IndexPip),
    (IndexPip, IndexDip),
    (IndexDip, IndexTip),
    // 中指
    (MiddleMcp, MiddlePip),
    (MiddlePip, MiddleDip),
    (MiddleDip, MiddleTip),
    // 薬指
    (RingMcp, RingPip),
    (RingPip, RingDip),
    (RingDip, RingTip),
    // 小指
    (PinkyMcp, PinkyPip),
    (PinkyPip, PinkyDip),
    (PinkyDip, PinkyTip),
    // 手のひら
    (Wrist, PinkyMcp),
    (ThumbMcp, IndexMcp),
    (IndexMcp, MiddleMcp),
    (MiddleMcp, RingMcp),
    (RingMcp, PinkyMcp),
];

/// スケール推定の基準ペア (手首 → 各指の付け根)
///
/// 順序固定。ベースライン距離配列はこの並びに対応する。
pub const REFERENCE_PAIRS: [(HandLandmark, HandLandmark); 4] = [
    (Wrist, PinkyMcp),
    (Wrist, RingMcp),
    (Wrist, MiddleMcp),
    (Wrist, IndexMcp),
];

/// 関節球の半径 (ワールド単位)
pub const JOINT_RADIUS: f32 = 0.07;

/// ボーン円柱の半径 (ワールド単位)
pub const BONE_RADIUS: f32 = 0.03;
