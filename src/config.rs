use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    /// カメラのZ位置 (メートル、視線は+Z方向)
    #[serde(default = "default_position_z")]
    pub position_z: f32,
    /// 垂直画角（度）ビューア投影用
    #[serde(default = "default_fov_v_deg")]
    pub fov_v_deg: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    /// ウィンドウ幅 (ピクセル)
    #[serde(default = "default_width")]
    pub width: usize,
    /// ウィンドウ高さ (ピクセル)
    #[serde(default = "default_height")]
    pub height: usize,
    /// キーポイント信頼度の表示閾値
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
}

fn default_position_z() -> f32 { -1.0 }
fn default_fov_v_deg() -> f32 { 60.0 }
fn default_width() -> usize { 960 }
fn default_height() -> usize { 720 }
fn default_confidence_threshold() -> f32 { 0.3 }

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position_z: default_position_z(),
            fov_v_deg: default_fov_v_deg(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.camera.position_z, -1.0);
        assert_eq!(config.camera.fov_v_deg, 60.0);
        assert_eq!(config.viewer.width, 960);
        assert_eq!(config.viewer.height, 720);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [camera]
            position_z = -2.5
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.position_z, -2.5);
        // 未指定フィールドはデフォルトで埋まる
        assert_eq!(config.camera.fov_v_deg, 60.0);
        assert_eq!(config.viewer.height, 720);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.viewer.width, 960);
    }
}
