//! 対話式調理セッション
//!
//! レシピを選んで +/- で人数を調整すると、材料表がその場で
//! 再計算される。状態遷移はすべて `NavState` に委ねる。

use crate::config::Config;
use crate::error::{RecetasError, Result};
use crate::render;
use dialoguer::Select;
use recetas_common::{scale, Catalog, NavState, Recipe};

/// セッション内の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookAction {
    /// 人数を1増やす
    More,
    /// 人数を1減らす
    Fewer,
    /// カタログへ戻る（別レシピを選び直す）
    Back,
    /// 終了
    Quit,
}

/// 対話式セッションを実行
pub fn run_cook_session(catalog: &Catalog, config: &Config, id: Option<u32>) -> Result<()> {
    let mut state = NavState::default();

    // idが指定されていれば直接詳細画面へ
    if let Some(id) = id {
        let recipe = catalog.get(id).ok_or(RecetasError::RecipeNotFound(id))?;
        state.select_recipe(recipe);
    }

    loop {
        if state.is_catalog() {
            match prompt_recipe(catalog)? {
                Some(recipe) => state.select_recipe(&recipe),
                None => break,
            }
            continue;
        }

        print_detail(&state)?;

        match prompt_action()? {
            CookAction::More => {
                state.increment_servings();
                // 上限は設定で決まる。コアはクランプしない
                if let Some((_, servings)) = state.detail() {
                    if servings > config.max_servings.max(1) {
                        state.decrement_servings();
                    }
                }
            }
            CookAction::Fewer => state.decrement_servings(),
            CookAction::Back => state.back(),
            CookAction::Quit => break,
        }
    }

    println!("👋 ¡Buen provecho!");
    Ok(())
}

/// カタログからレシピを選択。Noneなら終了
fn prompt_recipe(catalog: &Catalog) -> Result<Option<Recipe>> {
    let mut items: Vec<String> = catalog.all().iter().map(render::catalog_row).collect();
    items.push("終了".to_string());

    let selection = Select::new()
        .with_prompt("レシピを選択")
        .items(&items)
        .default(0)
        .interact()?;

    if selection == catalog.len() {
        return Ok(None);
    }
    Ok(Some(catalog.all()[selection].clone()))
}

/// 詳細画面での操作を選択
fn prompt_action() -> Result<CookAction> {
    let items = ["+ 人数を増やす", "- 人数を減らす", "← 一覧へ戻る", "終了"];
    let selection = Select::new()
        .with_prompt("操作")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => CookAction::More,
        1 => CookAction::Fewer,
        2 => CookAction::Back,
        _ => CookAction::Quit,
    })
}

/// 現在の選択の材料表を表示
fn print_detail(state: &NavState) -> Result<()> {
    let Some((recipe, servings)) = state.detail() else {
        return Ok(());
    };

    println!();
    print!("{}", render::recipe_header(recipe, servings));
    println!("材料:");
    let scaled = scale(recipe, servings)?;
    print!("{}", render::ingredient_table(&scaled));
    Ok(())
}
