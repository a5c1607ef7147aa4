use crate::error::{RecetasError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI/デスクトップ共通の利用者設定
///
/// コアは人数の上限を設けないため、上限のクランプは外側
/// （CLI・画面）がこの設定を使って行う。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 人数コントロールの上限
    pub max_servings: u32,

    /// 組み込みカタログの代わりに読むJSONファイル（任意）
    pub recipes_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_servings: 99,
            recipes_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecetasError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recetas").join("config.json"))
    }

    /// 人数を [1, max_servings] に収める
    pub fn clamp_servings(&self, servings: u32) -> u32 {
        servings.clamp(1, self.max_servings.max(1))
    }
}
