//! recetas-rust
//!
//! レシピカタログ・分量計算ツールのCLI側モジュール群

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

/// 設定に従ってカタログを構築する
///
/// `recipes_path` が設定されていればそのJSONを読み、
/// なければ組み込みカタログを使う。
pub fn load_catalog(config: &config::Config) -> error::Result<recetas_common::Catalog> {
    match &config.recipes_path {
        Some(path) => {
            if !path.exists() {
                return Err(error::RecetasError::FileNotFound(
                    path.display().to_string(),
                ));
            }
            let content = std::fs::read_to_string(path)?;
            Ok(recetas_common::Catalog::from_json(&content)?)
        }
        None => Ok(recetas_common::Catalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    #[test]
    fn test_load_catalog_builtin() {
        let catalog = load_catalog(&Config::default()).expect("ロード失敗");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = Config {
            recipes_path: Some(PathBuf::from("/nonexistent/recetas.json")),
            ..Default::default()
        };
        let result = load_catalog(&config);
        assert!(matches!(
            result,
            Err(error::RecetasError::FileNotFound(_))
        ));
    }
}
