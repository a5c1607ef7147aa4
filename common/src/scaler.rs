//! 分量換算エンジン
//!
//! 指定人数に対する各材料の表示用分量を計算する。
//! 計算は毎回フル実行する（カタログが小さいためキャッシュ不要）。

use crate::error::{Error, Result};
use crate::types::{Recipe, ScaledIngredient};

/// レシピの材料を指定人数に換算する
///
/// 材料ごとに入力順のまま1エントリを返す。
/// 固定材料（`is_static`）は分量表示を空文字列にする。
///
/// # Errors
/// - `Error::InvalidRecipe` - `base_servings == 0`（ロード側の欠陥）
/// - `Error::InvalidServings` - `requested_servings == 0`
///   （1へのクランプはナビゲーション側の責務。ここではクランプしない）
pub fn scale(recipe: &Recipe, requested_servings: u32) -> Result<Vec<ScaledIngredient>> {
    if recipe.base_servings == 0 {
        return Err(Error::InvalidRecipe { id: recipe.id });
    }
    if requested_servings == 0 {
        return Err(Error::InvalidServings(requested_servings));
    }

    let scaled = recipe
        .ingredients
        .iter()
        .map(|ing| {
            let quantity_text = if ing.is_static {
                String::new()
            } else {
                let raw =
                    ing.amount * f64::from(requested_servings) / f64::from(recipe.base_servings);
                format_quantity(raw)
            };
            ScaledIngredient {
                name: ing.name.clone(),
                quantity_text,
                unit: ing.unit.clone(),
            }
        })
        .collect();

    Ok(scaled)
}

/// 分量の表示用フォーマット
///
/// 小数第1位に四捨五入（0.5は切り上げ）し、整数になる場合は
/// 小数点を付けない:
/// - 4.0  → "4"
/// - 4.5  → "4.5"
/// - 4.05 → "4.1"
pub fn format_quantity(raw: f64) -> String {
    // 補正項1e-9: 4.05が二進表現で4.04999…となり切り捨てられるのを防ぐ
    let tenths = (raw * 10.0 + 1e-9).round();
    let rounded = tenths / 10.0;
    if tenths as i64 % 10 == 0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    fn salmon() -> Recipe {
        Recipe {
            id: 2,
            title: "Salmón con Espárragos".to_string(),
            base_servings: 2,
            ingredients: vec![
                Ingredient {
                    name: "Lomos de salmón".to_string(),
                    amount: 2.0,
                    unit: "ud".to_string(),
                    is_static: false,
                },
                Ingredient {
                    name: "Aceite de oliva".to_string(),
                    amount: 15.0,
                    unit: "ml".to_string(),
                    is_static: false,
                },
                Ingredient {
                    name: "Sal y pimienta".to_string(),
                    amount: 1.0,
                    unit: "pizca".to_string(),
                    is_static: true,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_scale_doubles() {
        // 基準2人分 → 4人分: 15ml → "30"
        let result = scale(&salmon(), 4).expect("換算失敗");
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].name, "Aceite de oliva");
        assert_eq!(result[1].quantity_text, "30");
        assert_eq!(result[1].unit, "ml");
    }

    #[test]
    fn test_scale_halves_with_decimal() {
        // 基準2人分 → 1人分: 15ml → "7.5"
        let result = scale(&salmon(), 1).expect("換算失敗");
        assert_eq!(result[1].quantity_text, "7.5");
    }

    #[test]
    fn test_scale_base_reproduces_amounts() {
        // 基準人数そのままなら元の分量を再現する
        let recipe = salmon();
        let result = scale(&recipe, recipe.base_servings).expect("換算失敗");
        assert_eq!(result[0].quantity_text, "2");
        assert_eq!(result[1].quantity_text, "15");
    }

    #[test]
    fn test_scale_preserves_order() {
        let result = scale(&salmon(), 3).expect("換算失敗");
        let names: Vec<&str> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Lomos de salmón", "Aceite de oliva", "Sal y pimienta"]
        );
    }

    #[test]
    fn test_static_ingredient_quantity_empty() {
        // 固定材料は人数に関係なく分量表示が空
        for servings in [1, 2, 5, 100] {
            let result = scale(&salmon(), servings).expect("換算失敗");
            assert_eq!(result[2].quantity_text, "");
            assert_eq!(result[2].unit, "pizca");
        }
    }

    #[test]
    fn test_scale_ratio_property() {
        // 2倍の人数なら分量も約2倍。各値の丸め誤差は0.05以内なので、
        // q3を2倍した分と合わせて差は0.15以内に収まる
        let recipe = salmon();
        let s3 = scale(&recipe, 3).expect("換算失敗");
        let s6 = scale(&recipe, 6).expect("換算失敗");
        let q3: f64 = s3[1].quantity_text.parse().expect("数値でない");
        let q6: f64 = s6[1].quantity_text.parse().expect("数値でない");
        assert!((q6 - q3 * 2.0).abs() <= 0.15);
    }

    #[test]
    fn test_scale_zero_servings_is_error() {
        let result = scale(&salmon(), 0);
        assert!(matches!(result, Err(Error::InvalidServings(0))));
    }

    #[test]
    fn test_scale_zero_base_servings_is_error() {
        let mut recipe = salmon();
        recipe.base_servings = 0;
        let result = scale(&recipe, 2);
        assert!(matches!(result, Err(Error::InvalidRecipe { id: 2 })));
    }

    #[test]
    fn test_scale_no_upper_bound() {
        let result = scale(&salmon(), 1000).expect("換算失敗");
        assert_eq!(result[1].quantity_text, "7500");
    }

    #[test]
    fn test_scale_empty_ingredients() {
        let recipe = Recipe {
            id: 9,
            base_servings: 1,
            ..Default::default()
        };
        let result = scale(&recipe, 3).expect("換算失敗");
        assert!(result.is_empty());
    }

    #[test]
    fn test_format_integer_strips_decimal() {
        assert_eq!(format_quantity(4.0), "4");
        assert_eq!(format_quantity(30.0), "30");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_quantity(4.5), "4.5");
        assert_eq!(format_quantity(7.5), "7.5");
        assert_eq!(format_quantity(0.3), "0.3");
    }

    #[test]
    fn test_format_rounds_to_one_decimal() {
        assert_eq!(format_quantity(4.04), "4");
        assert_eq!(format_quantity(4.05), "4.1"); // 0.5は切り上げ
        assert_eq!(format_quantity(4.449), "4.4");
        assert_eq!(format_quantity(0.04), "0");
    }

    #[test]
    fn test_format_rounded_integer() {
        // 丸めた結果が整数になる場合も小数点を付けない
        assert_eq!(format_quantity(3.96), "4");
        assert_eq!(format_quantity(2.04), "2");
    }
}
