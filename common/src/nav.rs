//! 画面遷移・選択状態
//!
//! 「現在の画面＋選択中レシピ＋人数」を1つの状態機械の値として
//! 明示的に持つ。フラグの散在を避け、すべての遷移を全域関数にする。

use crate::types::Recipe;

/// 現在の画面と選択状態
///
/// 詳細画面に入るたびに人数はレシピの基準人数へリセットされる。
/// 前回の選択の人数が持ち越されることはない。
#[derive(Debug, Clone, Default)]
pub enum NavState {
    /// カタログ画面（選択なし）
    #[default]
    Catalog,

    /// 詳細画面（選択中レシピと現在の人数）
    Detail { recipe: Recipe, servings: u32 },
}

impl NavState {
    /// レシピを選択して詳細画面へ遷移する
    ///
    /// 人数は常に `recipe.base_servings` から始まる。
    pub fn select_recipe(&mut self, recipe: &Recipe) {
        *self = NavState::Detail {
            recipe: recipe.clone(),
            servings: recipe.base_servings,
        };
    }

    /// カタログ画面へ戻る。選択は完全に破棄される
    pub fn back(&mut self) {
        *self = NavState::Catalog;
    }

    /// 人数を1増やす。カタログ画面では何もしない
    pub fn increment_servings(&mut self) {
        if let NavState::Detail { servings, .. } = self {
            *servings = servings.saturating_add(1);
        }
    }

    /// 人数を1減らす。下限は1（1のときは何もしない）
    pub fn decrement_servings(&mut self) {
        if let NavState::Detail { servings, .. } = self {
            *servings = servings.saturating_sub(1).max(1);
        }
    }

    /// 詳細画面なら（レシピ, 人数）を返す
    pub fn detail(&self) -> Option<(&Recipe, u32)> {
        match self {
            NavState::Catalog => None,
            NavState::Detail { recipe, servings } => Some((recipe, *servings)),
        }
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, NavState::Catalog)
    }
}
