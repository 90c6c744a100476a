//! Configuration
//!
//! JSON設定ファイル（体重・身長）の読み込み

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::metrics::PhysicalProfile;

/// 設定ファイルのデフォルトパス
pub const DEFAULT_CONFIG_PATH: &str = "./.steptrack/config.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// 体重（kg）
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// 身長（m）
    #[serde(default)]
    pub height_m: Option<f64>,
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = expand(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// ファイルがなければ空の設定を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !expand(path).exists() {
            info!("No config file at {}, using command line values only", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// コマンドライン引数で上書きした身体情報を返す
    ///
    /// 値の正負はここでは検証しない（計算側で検証する）
    pub fn resolve_profile(
        &self,
        weight_kg: Option<f64>,
        height_m: Option<f64>,
    ) -> Result<PhysicalProfile> {
        let Some(weight) = weight_kg.or(self.weight_kg) else {
            bail!("Weight is not set: pass --weight or set weight_kg in the config file");
        };
        let Some(height) = height_m.or(self.height_m) else {
            bail!("Height is not set: pass --height or set height_m in the config file");
        };
        Ok(PhysicalProfile::new(weight, height))
    }
}
