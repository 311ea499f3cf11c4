use anyhow::Result;
use log::{info, warn};
use tenohira_overlay::config::Config;
use tenohira_overlay::overlay::OverlayPipeline;
use tenohira_overlay::pose::{KeypointSource, SyntheticHand};
use tenohira_overlay::render::{Key, OverlayViewer};

const CONFIG_PATH: &str = "config.toml";

/// 合成ハンドの接近・後退サイクル (フレーム数)
const OSCILLATION_PERIOD: f32 = 240.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load_or_default(CONFIG_PATH);
    let mut viewer = OverlayViewer::new("tenohira overlay", &config.viewer, &config.camera)?;
    let mut pipeline = OverlayPipeline::from_config(&config.camera);
    let mut hand = SyntheticHand::new();

    info!("camera_z = {}", pipeline.camera_z());
    info!("press C to calibrate, Esc to quit");

    let mut tick: u32 = 0;
    while viewer.is_open() {
        // 見かけスケールを 0.6〜1.4 で往復させ、接近・後退を模す
        let phase = tick as f32 / OSCILLATION_PERIOD * std::f32::consts::TAU;
        hand.set_apparent_scale(1.0 + 0.4 * phase.sin());

        let pose = match hand.next_pose() {
            Some(pose) => pose,
            None => continue,
        };

        if viewer.is_key_pressed(Key::C) {
            match pipeline.calibrate(&pose) {
                Ok(()) => info!(
                    "calibrated at apparent scale {:.3}",
                    hand.apparent_scale()
                ),
                Err(e) => warn!("calibration failed: {}", e),
            }
        }

        match pipeline.process(&pose) {
            Ok(frame) => {
                viewer.clear(0x101010);
                viewer.draw_overlay(&frame, &pose);
            }
            Err(e) => {
                // フレーム単位の失敗: 描画をスキップして継続
                warn!("frame skipped: {}", e);
            }
        }

        if tick % 120 == 0 {
            if let Some(scale) = pipeline.estimate_scale(&pose) {
                info!(
                    "scale {:.3}, depth offset {:.4}",
                    scale,
                    pipeline.depth_offset(&pose)
                );
            }
        }

        viewer.update()?;
        tick = tick.wrapping_add(1);
    }

    Ok(())
}
