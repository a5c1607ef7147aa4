//! テキスト出力の整形
//!
//! 端末向けの一覧・詳細表示を組み立てる。画面側から独立して
//! テストできるよう純関数にまとめる。

use recetas_common::{Recipe, ScaledIngredient};

/// カタログ1行分
///
/// 例: `[2] Salmón con Espárragos (Principal / Air Fryer, 2人分, 12 min)`
pub fn catalog_row(recipe: &Recipe) -> String {
    format!(
        "[{}] {} ({} / {}, {}人分, {})",
        recipe.id,
        recipe.title,
        recipe.category,
        recipe.method,
        recipe.base_servings,
        recipe.cook_time
    )
}

/// 換算済み材料の表
///
/// 固定材料は分量を出さず単位（「pizca」等）だけを出す。
pub fn ingredient_table(ingredients: &[ScaledIngredient]) -> String {
    let mut out = String::new();
    for ing in ingredients {
        let quantity = if ing.quantity_text.is_empty() {
            ing.unit.clone()
        } else {
            format!("{} {}", ing.quantity_text, ing.unit)
        };
        out.push_str(&format!("  - {:<40} {}\n", ing.name, quantity));
    }
    out
}

/// 詳細画面のヘッダ部
pub fn recipe_header(recipe: &Recipe, servings: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("🍳 {}\n", recipe.title));
    if !recipe.description.is_empty() {
        out.push_str(&format!("{}\n", recipe.description));
    }
    out.push_str(&format!(
        "分類: {} / 方法: {} / 準備: {} / 調理: {} / {}\n",
        recipe.category, recipe.method, recipe.prep_time, recipe.cook_time, recipe.calories
    ));
    out.push_str(&format!(
        "人数: {}人分（基準 {}人分）\n",
        servings, recipe.base_servings
    ));
    out
}

/// 手順の番号付きリスト
pub fn steps_list(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}. {}\n", i + 1, step))
        .collect()
}
