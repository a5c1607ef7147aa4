//! レシピデータの型定義
//!
//! CLIとデスクトップで共有される型:
//! - Recipe: カタログに登録されるレシピ本体
//! - Ingredient: 材料（基準人数に対する分量）
//! - ScaledIngredient: 人数換算後の表示用材料

use serde::{Deserialize, Serialize};

/// レシピ本体
///
/// `base_servings` 人分を基準に材料量が記載される。
/// 構築後は不変で、人数換算は常に派生ビュー（ScaledIngredient）を生成する。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: u32,
    pub title: String,

    /// 画像URL（表示側で解決。コアでは読み込まない）
    pub image: String,

    pub category: String,

    /// 調理方法（Air Fryer など）
    pub method: String,

    pub prep_time: String,
    pub cook_time: String,
    pub calories: String,
    pub description: String,

    /// 基準人数（1以上）
    pub base_servings: u32,

    /// 材料。登録順が表示順
    pub ingredients: Vec<Ingredient>,

    /// 手順。登録順が表示順
    pub steps: Vec<String>,
}

/// 材料
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub name: String,

    /// 基準人数に対する分量（0以上）
    pub amount: f64,

    pub unit: String,

    /// true なら人数に依存しない（「ひとつまみ」等）。分量表示は省略される
    pub is_static: bool,
}

/// 人数換算後の表示用材料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,

    /// 表示用分量。固定材料は空文字列
    pub quantity_text: String,

    pub unit: String,
}
