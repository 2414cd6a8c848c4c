//! 検索・カテゴリ絞り込み
//!
//! カタログ順を保ったまま、クエリとカテゴリの両方に一致するレコードを返す。

use crate::catalog::{Category, ImageRecord};
use serde::{Deserialize, Serialize};

/// 現在の絞り込み条件
///
/// 変更のたびに丸ごと置き換える。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: Category,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: self.category,
        }
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self {
            query: self.query.clone(),
            category,
        }
    }

    /// Clearボタン相当
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// 比較用に正規化したクエリ（前後空白除去 + 小文字化）
    pub fn folded_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn is_active(&self) -> bool {
        !self.category.is_all() || !self.query.trim().is_empty()
    }
}

/// クエリ照合の対象フィールド設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// カテゴリ名もクエリの照合対象にする
    pub match_category_names: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            match_category_names: true,
        }
    }
}

/// 1レコードがクエリ・カテゴリの両方に一致するか
pub fn matches(record: &ImageRecord, state: &FilterState, options: MatchOptions) -> bool {
    category_matches(record, state.category)
        && query_matches(record, &state.folded_query(), options)
}

fn category_matches(record: &ImageRecord, selector: Category) -> bool {
    selector.is_all() || record.category == selector
}

/// `folded` は正規化済みクエリ
fn query_matches(record: &ImageRecord, folded: &str, options: MatchOptions) -> bool {
    if folded.is_empty() {
        return true;
    }

    let hit = |text: &str| text.to_lowercase().contains(folded);

    record.title.as_deref().is_some_and(hit)
        || hit(record.alt.as_str())
        || record.tags.iter().any(|tag| hit(tag.as_str()))
        || (options.match_category_names && hit(record.category.as_str()))
}

/// デフォルト設定で絞り込み
pub fn filter<'a, I>(records: I, state: &FilterState) -> Vec<&'a ImageRecord>
where
    I: IntoIterator<Item = &'a ImageRecord>,
{
    filter_with(records, state, MatchOptions::default())
}

/// 入力順を保ったまま絞り込み
pub fn filter_with<'a, I>(
    records: I,
    state: &FilterState,
    options: MatchOptions,
) -> Vec<&'a ImageRecord>
where
    I: IntoIterator<Item = &'a ImageRecord>,
{
    let folded = state.folded_query();
    let result: Vec<&ImageRecord> = records
        .into_iter()
        .filter(|r| category_matches(r, state.category) && query_matches(r, &folded, options))
        .collect();

    tracing::debug!(
        query = %state.query,
        category = %state.category,
        matched = result.len(),
        "filter applied"
    );
    result
}
