//! タイトル検索フィルタ
//!
//! 大文字小文字を無視した部分一致のみ。並び替えやスコアリングは
//! 行わず、入力順をそのまま保つ。

use crate::types::Recipe;

/// タイトルにクエリを含むレシピを入力順のまま返す
///
/// 空クエリはすべてのレシピにマッチする。
pub fn filter_by_title<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return recipes.iter().collect();
    }
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}
