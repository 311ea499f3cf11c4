use crate::overlay::baseline::{reference_distances, REFERENCE_PAIR_COUNT};
use crate::pose::HandPose;

/// 現在の手とベースラインの「平均相対スケール」を推定する
///
/// 基準ペアごとに 現在距離 / ベースライン距離 の比を取り、
/// トリム平均 (最大1つ・最小1つを除外した残り2値の算術平均) を返す。
/// 単一ランドマークのジッタで比が跳ねてもフレーム単位で吸収できる。
pub fn estimate_scale(pose: &HandPose, baseline: &[f32; REFERENCE_PAIR_COUNT]) -> f32 {
    let current = reference_distances(pose);

    let mut ratios = [0.0; REFERENCE_PAIR_COUNT];
    for i in 0..REFERENCE_PAIR_COUNT {
        ratios[i] = current[i] / baseline[i];
    }

    trimmed_mean(&ratios)
}

/// 最大値と最小値を1インスタンスずつ取り除いた算術平均
///
/// 削除は値単位: 極値が重複していても消えるのは各1つだけ。
/// 最小値の探索は最大値を除いた残りに対して行う。
fn trimmed_mean(ratios: &[f32]) -> f32 {
    let mut values: Vec<f32> = ratios.to_vec();

    if let Some(idx) = position_of_extreme(&values, |a, b| a > b) {
        values.remove(idx);
    }
    if let Some(idx) = position_of_extreme(&values, |a, b| a < b) {
        values.remove(idx);
    }

    values.iter().sum::<f32>() / values.len() as f32
}

/// 述語が示す側の極値の最初の位置
fn position_of_extreme(values: &[f32], better: impl Fn(f32, f32) -> bool) -> Option<usize> {
    let mut result: Option<usize> = None;
    for (i, v) in values.iter().enumerate() {
        match result {
            None => result = Some(i),
            Some(j) if better(*v, values[j]) => result = Some(i),
            Some(_) => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::skeleton::REFERENCE_PAIRS;
    use crate::pose::Keypoint;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    /// 基準ペアの距離が指定値になるポーズを作る
    fn pose_with_distances(d: [f32; 4]) -> HandPose {
        let mut pose = HandPose::default();
        for (dist, (_, b)) in d.iter().zip(REFERENCE_PAIRS.iter()) {
            pose.keypoints[*b as usize] = Keypoint::new(*dist, 0.0, 0.0, 0.9);
        }
        pose
    }

    #[test]
    fn test_trimmed_mean_basic() {
        // 1.2 と 0.8 が落ち、残り [1.1, 0.9] の平均
        assert!(approx_eq(trimmed_mean(&[1.2, 1.1, 0.9, 0.8]), 1.0));
    }

    #[test]
    fn test_trimmed_mean_duplicate_extrema() {
        // 最大2.0と最小0.5を1つずつ削除、重複した1.0は両方残る
        assert!(approx_eq(trimmed_mean(&[1.0, 1.0, 2.0, 0.5]), 1.0));
    }

    #[test]
    fn test_trimmed_mean_all_equal() {
        // 全要素同値でも削除は2つだけ
        assert!(approx_eq(trimmed_mean(&[1.5, 1.5, 1.5, 1.5]), 1.5));
    }

    #[test]
    fn test_trimmed_mean_duplicate_max() {
        // 最大3.0は1つだけ消える → 残り [3.0, 2.0]
        assert!(approx_eq(trimmed_mean(&[3.0, 3.0, 2.0, 1.0]), 2.5));
    }

    #[test]
    fn test_identity_scale() {
        let baseline = [0.10, 0.11, 0.12, 0.09];
        let pose = pose_with_distances(baseline);
        assert!(approx_eq(estimate_scale(&pose, &baseline), 1.0));
    }

    #[test]
    fn test_uniform_growth() {
        let baseline = [0.10, 0.11, 0.12, 0.09];
        let pose = pose_with_distances([0.20, 0.22, 0.24, 0.18]);
        assert!(approx_eq(estimate_scale(&pose, &baseline), 2.0));
    }

    #[test]
    fn test_spec_scenario() {
        // 比 [1.2, 1.1, 0.9, 0.8] → 1.2 と 0.8 を除外 → 平均 1.0
        let baseline = [1.0, 1.0, 1.0, 1.0];
        let pose = pose_with_distances([1.2, 1.1, 0.9, 0.8]);
        assert!(approx_eq(estimate_scale(&pose, &baseline), 1.0));
    }

    #[test]
    fn test_single_outlier_suppressed() {
        // 1ペアだけ跳ねても推定値は残りに支配される
        let baseline = [0.1, 0.1, 0.1, 0.1];
        let pose = pose_with_distances([0.1, 0.1, 0.1, 0.5]);
        assert!(approx_eq(estimate_scale(&pose, &baseline), 1.0));
    }
}
