use clap::{Parser, Subcommand};
use gallery_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "画像カタログの検索・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定または組み込みカタログ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 絞り込み結果を一覧表示
    List {
        /// 検索キーワード（タイトル・説明・タグ・カテゴリ）
        #[arg(short, long, default_value = "")]
        query: String,

        /// カテゴリ (All/Nature/Architecture/People/Abstract/Picasso)
        #[arg(short, long, default_value = "All")]
        category: Category,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1件の詳細を表示
    Show {
        /// 画像ID
        #[arg(required = true)]
        id: String,
    },

    /// カテゴリ一覧と件数
    Categories,

    /// 対話的にビューアを操作（n:次 p:前 q:閉じる）
    Browse {
        /// 検索キーワード
        #[arg(short, long, default_value = "")]
        query: String,

        /// カテゴリ
        #[arg(short, long, default_value = "All")]
        category: Category,

        /// 最初に開く位置（絞り込み結果内、0始まり）
        #[arg(short, long, default_value = "0")]
        start: usize,
    },

    /// ローカル画像フォルダからカタログJSONを生成
    Scan {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 付与するカテゴリ
        #[arg(short, long)]
        category: Category,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/catalog.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// カタログJSONファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// カテゴリ名を検索対象から外す
        #[arg(long)]
        no_category_match: bool,

        /// カテゴリ名を検索対象に戻す
        #[arg(long, conflicts_with = "no_category_match")]
        category_match: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
