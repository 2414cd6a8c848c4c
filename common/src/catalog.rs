//! 画像カタログ
//!
//! CLIとWeb(WASM)で共有される型:
//! - Category: 固定のカテゴリ集合（先頭は常に "All"）
//! - ImageRecord: 1枚の画像のメタデータ
//! - Catalog: 起動時に一度だけ構築される不変の画像リスト

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// ビルド時に埋め込まれるデモ用カタログ
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/images.json");

/// 画像カテゴリ
///
/// `All` はフィルタ用の番兵で、レコード自身のカテゴリには使えない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Nature,
    Architecture,
    People,
    Abstract,
    Picasso,
}

impl Category {
    /// 宣言順のカテゴリ一覧（"All" が先頭）
    pub const ALL_CATEGORIES: [Category; 6] = [
        Category::All,
        Category::Nature,
        Category::Architecture,
        Category::People,
        Category::Abstract,
        Category::Picasso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Nature => "Nature",
            Category::Architecture => "Architecture",
            Category::People => "People",
            Category::Abstract => "Abstract",
            Category::Picasso => "Picasso",
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// 完全一致（大文字小文字を区別）
    fn from_str(s: &str) -> Result<Self> {
        Category::ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// 安定IDを持つ要素
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// 画像レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub alt: String,

    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,

    /// 表示に使う画像（URLまたはローカル参照）
    pub src: String,

    /// `src` の読み込みに失敗したときに一度だけ使う画像
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// 出典ページ（ビューアの "Source" リンク）
    #[serde(default, alias = "srcLink", skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageRecord {
    /// 必須フィールドのみでレコードを作る
    pub fn new(
        id: impl Into<String>,
        alt: impl Into<String>,
        category: Category,
        src: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            alt: alt.into(),
            category,
            tags: Vec::new(),
            src: src.into(),
            fallback_src: None,
            author: None,
            source_link: None,
            width: None,
            height: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback(mut self, fallback_src: impl Into<String>) -> Self {
        self.fallback_src = Some(fallback_src.into());
        self
    }

    /// 表示用タイトル（未設定なら alt）
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.alt)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidRecord {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.alt.trim().is_empty() {
            return Err(invalid("alt text is empty"));
        }
        if self.src.trim().is_empty() {
            return Err(invalid("src is empty"));
        }
        if self.category.is_all() {
            return Err(invalid("category 'All' is reserved for filtering"));
        }
        Ok(())
    }
}

impl Identified for ImageRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 不変の画像カタログ
///
/// クローンは `Arc` の参照カウントのみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[ImageRecord]>,
}

impl Catalog {
    /// レコードを検証してカタログを構築
    pub fn new(records: Vec<ImageRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        tracing::debug!(count = records.len(), "catalog constructed");
        Ok(Self {
            records: records.into(),
        })
    }

    /// JSON配列からカタログを構築
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ImageRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// JSONファイルからカタログを読み込み
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 組み込みのデモカタログ
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// カテゴリごとの件数（宣言順、"All" は全件）
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL_CATEGORIES
            .iter()
            .map(|&category| {
                let count = if category.is_all() {
                    self.len()
                } else {
                    self.records.iter().filter(|r| r.category == category).count()
                };
                (category, count)
            })
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.records)?)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
