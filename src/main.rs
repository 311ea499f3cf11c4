use anyhow::Result;
use std::io::{self, Write};
use tenohira_overlay::config::Config;
use tenohira_overlay::overlay::OverlayPipeline;
use tenohira_overlay::pose::SyntheticHand;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Tenohira Overlay ({}) ===", env!("GIT_VERSION"));
    println!("カメラZ位置: {}", config.camera.position_z);
    println!();
    println!("コマンド:");
    println!("  d <scale>  - 手の見かけスケールを設定 (例: d 1.5)");
    println!("  c          - 現在のポーズでキャリブレーション");
    println!("  o          - スケール推定値と深度オフセットを表示");
    println!("  f          - 1フレーム処理してトランスフォームを表示");
    println!("  q          - 終了");
    println!();

    let mut hand = SyntheticHand::new();
    let mut pipeline = OverlayPipeline::from_config(&config.camera);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let parts: Vec<&str> = input.trim().split_whitespace().collect();

        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "d" if parts.len() == 2 => {
                let scale: f32 = parts[1].parse()?;
                hand.set_apparent_scale(scale);
                println!("見かけスケール: {}", scale);
            }
            "c" => match pipeline.calibrate(&hand.pose()) {
                Ok(()) => println!("キャリブレーション完了"),
                Err(e) => println!("キャリブレーション失敗: {}", e),
            },
            "o" => {
                let pose = hand.pose();
                match pipeline.estimate_scale(&pose) {
                    Some(scale) => {
                        println!("スケール推定値: {:.4}", scale);
                        println!("深度オフセット: {:.4}", pipeline.depth_offset(&pose));
                    }
                    None => {
                        println!("未キャリブレーション (オフセットは常に0)");
                    }
                }
            }
            "f" => {
                let pose = hand.pose();
                match pipeline.process(&pose) {
                    Ok(frame) => {
                        println!("関節 {} 球 / ボーン {} 本", frame.joints.len(), frame.bones.len());
                        println!("手首: {:?}", frame.joints[0].translation);
                        println!("中指先: {:?}", frame.joints[12].translation);
                        println!("ボーン0 スケール: {:?}", frame.bones[0].scale);
                    }
                    Err(e) => println!("フレーム処理失敗: {}", e),
                }
            }
            "q" => {
                println!("終了します");
                break;
            }
            _ => {
                println!("不明なコマンド: {}", parts[0]);
            }
        }
    }

    Ok(())
}
