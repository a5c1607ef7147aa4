use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recetas")]
#[command(about = "レシピカタログ・分量計算ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログの全レシピを一覧表示
    List,

    /// タイトルでレシピを検索（大文字小文字は区別しない）
    Search {
        /// 検索文字列
        #[arg(required = true)]
        query: String,
    },

    /// レシピの詳細と換算済み材料を表示
    Show {
        /// レシピID（`list`で確認）
        #[arg(required = true)]
        id: u32,

        /// 人数（デフォルト: レシピの基準人数）
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// 対話モード: レシピを選んで+/-で人数を調整
    Cook {
        /// レシピID（省略時は一覧から選択）
        id: Option<u32>,
    },
}
