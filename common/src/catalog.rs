//! レシピカタログ
//!
//! 起動時に一度だけ構築される不変のレシピ一覧。
//! 組み込みデータ（data/recipes.json）または任意のJSON文字列から
//! 構築でき、不正データはロード時に検出する。実行時に失敗する
//! 操作は存在しない。

use crate::error::{Error, Result};
use crate::types::Recipe;

/// 組み込みカタログのJSON（元アプリと同じ2レシピ）
const BUILTIN_JSON: &str = include_str!("../data/recipes.json");

/// 不変のレシピカタログ
///
/// 登録順がそのまま表示順。変更APIは持たない。
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// JSON配列からカタログを構築し、ロード時の不変条件を検証する
    ///
    /// 検証内容:
    /// - `baseServings >= 1`
    /// - すべての材料で `amount >= 0`
    /// - idの重複なし
    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::from_recipes(recipes)
    }

    /// 構築済みのレシピ列からカタログを構築し、検証する
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for recipe in &recipes {
            if recipe.base_servings < 1 {
                return Err(Error::Catalog(format!(
                    "レシピ '{}' (id: {}) の基準人数が不正です: {}",
                    recipe.title, recipe.id, recipe.base_servings
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(Error::Catalog(format!("idが重複しています: {}", recipe.id)));
            }
            for ing in &recipe.ingredients {
                if ing.amount < 0.0 {
                    return Err(Error::Catalog(format!(
                        "レシピ '{}' の材料 '{}' の分量が負です: {}",
                        recipe.title, ing.name, ing.amount
                    )));
                }
            }
        }
        Ok(Self { recipes })
    }

    /// 組み込みカタログ
    ///
    /// 埋め込みデータはテストで検証済みのため失敗しない。
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_JSON).expect("組み込みカタログが不正です")
    }

    /// 全レシピを固定順で返す
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// idでレシピを引く
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
