//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// レシピデータ自体の不整合（基準人数0など）。ロード側の欠陥を示す
    #[error("レシピデータが不正です (id: {id}): 基準人数は1以上が必要です")]
    InvalidRecipe { id: u32 },

    /// 呼び出し側が1未満の人数を渡した。クランプはナビゲーション側の責務
    #[error("人数が不正です: {0} (1以上を指定してください)")]
    InvalidServings(u32),

    /// カタログのロード時検証エラー
    #[error("カタログエラー: {0}")]
    Catalog(String),

    #[error("JSONエラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_recipe() {
        let error = Error::InvalidRecipe { id: 3 };
        let display = format!("{}", error);
        assert!(display.contains("id: 3"));
        assert!(display.contains("基準人数"));
    }

    #[test]
    fn test_error_display_invalid_servings() {
        let error = Error::InvalidServings(0);
        let display = format!("{}", error);
        assert!(display.contains("人数が不正"));
        assert!(display.contains("0"));
    }

    #[test]
    fn test_error_display_catalog() {
        let error = Error::Catalog("材料の分量が負です".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "カタログエラー: 材料の分量が負です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidServings(0);
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidServings"));
    }
}
