//! 描画層（Webコンポーネント・CLI）へ渡すデータ
//!
//! - CardView: グリッドの1枚分
//! - ViewerView: ビューアに表示するレコードとナビゲーション情報
//! - ViewerKey / is_card_activation_key: キー入力の割り当て

use crate::catalog::{Category, Identified, ImageRecord};
use crate::selection::{NavigationInfo, Selection};
use serde::Serialize;

/// 絞り込み結果が空のときの表示
pub const EMPTY_STATE_MESSAGE: &str = "No images match your filters.";

/// グリッドに並べるカード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// 描画リストのキー
    pub id: String,
    pub display_src: String,
    pub alt: String,
    pub title: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_record(record: &ImageRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_src: record.src.clone(),
            alt: record.alt.clone(),
            title: record.title.clone(),
            category: record.category,
            tags: record.tags.clone(),
        }
    }

    /// スクリーンリーダー向けラベル
    pub fn aria_label(&self) -> String {
        format!("{}: {}", self.category, self.alt)
    }
}

/// 絞り込み結果をカードへ（位置 i のカードは list[i] に対応）
pub fn cards(list: &[&ImageRecord]) -> Vec<CardView> {
    list.iter().map(|r| CardView::from_record(r)).collect()
}

/// ビューアに渡す表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerView<'a> {
    pub record: &'a ImageRecord,
    pub nav: NavigationInfo,
}

impl<'a> ViewerView<'a> {
    /// 閉じている、または位置が範囲外なら None
    pub fn build(list: &[&'a ImageRecord], selection: &Selection) -> Option<Self> {
        let resolved = selection.reconcile(list);
        let record = resolved.current(list).copied()?;
        Some(Self {
            record,
            nav: resolved.navigation(list.len()),
        })
    }

    pub fn counter_label(&self) -> String {
        self.nav.counter_label().unwrap_or_default()
    }
}

/// ビューア下部のクレジット表記
///
/// 作者と出典リンクはそれぞれ独立に表示する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credit {
    pub author: Option<String>,
    pub source_link: Option<String>,
}

impl Credit {
    /// どちらも無ければ None
    pub fn from_record(record: &ImageRecord) -> Option<Self> {
        let present = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        let credit = Self {
            author: present(&record.author),
            source_link: present(&record.source_link),
        };
        if credit.author.is_none() && credit.source_link.is_none() {
            None
        } else {
            Some(credit)
        }
    }
}

/// ビューアが横取りするキー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Dismiss,
    Advance,
    Retreat,
}

impl ViewerKey {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(ViewerKey::Dismiss),
            "ArrowRight" | "Right" => Some(ViewerKey::Advance),
            "ArrowLeft" | "Left" => Some(ViewerKey::Retreat),
            _ => None,
        }
    }

    /// 選択状態へ適用
    pub fn apply<T: Identified>(&self, selection: &Selection, list: &[T]) -> Selection {
        if !selection.is_open() {
            return selection.clone();
        }
        match self {
            ViewerKey::Dismiss => selection.close(),
            ViewerKey::Advance => selection.next(list),
            ViewerKey::Retreat => selection.previous(list),
        }
    }
}

/// カードを開くキー（Enter / Space）
pub fn is_card_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
