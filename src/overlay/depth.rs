/// スケール推定値の下限クランプ
///
/// 参照式 camera_z * (1 - 1/scale) は scale→0 で発散する。
/// ここで下限を切り、1フレームの異常値で無限大オフセットが
/// 出ないようにする。
pub const MIN_SCALE: f32 = 1e-4;

/// スケール推定値をカメラ空間の深度オフセットに変換する
///
/// 見かけが大きい (scale > 1) ならベースラインより手前に居るはずなので、
/// 全点を視線軸に沿ってカメラ寄りへ押し出す。補正は全点一律。
pub fn depth_offset(scale: f32, camera_z: f32) -> f32 {
    let scale = scale.max(MIN_SCALE);
    camera_z * (1.0 - 1.0 / scale)
}
