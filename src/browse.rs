//! 対話式ビューア
//!
//! 絞り込み結果の中を次へ/前へ（循環）移動する。
//! 表示中に検索条件を変えた場合、開いている画像が結果に残っていれば
//! その位置へ追従し、残っていなければビューアを閉じる。

use crate::error::{GalleryError, Result};
use crate::report::format_viewer;
use gallery_common::{
    filter_with, Catalog, Category, FilterState, ImageRecord, MatchOptions, Selection, ViewerKey,
    ViewerView, EMPTY_STATE_MESSAGE,
};
use dialoguer::Input;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 次・前・閉じる
    Key(ViewerKey),
    /// 検索キーワードを変更
    Query(String),
    /// カテゴリを変更
    Category(Category),
}

/// 入力を解釈（空入力は「次へ」）
pub fn parse_action(input: &str) -> Option<BrowseAction> {
    let trimmed = input.trim();
    match trimmed {
        "" | "n" | "l" => Some(BrowseAction::Key(ViewerKey::Advance)),
        "p" | "h" => Some(BrowseAction::Key(ViewerKey::Retreat)),
        "q" | "Q" => Some(BrowseAction::Key(ViewerKey::Dismiss)),
        _ => {
            if let Some(query) = trimmed.strip_prefix('/') {
                Some(BrowseAction::Query(query.trim().to_string()))
            } else if let Some(name) = trimmed.strip_prefix("c ") {
                name.trim().parse().ok().map(BrowseAction::Category)
            } else {
                None
            }
        }
    }
}

/// ビューアのセッション状態
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    options: MatchOptions,
    filter: FilterState,
    list: Vec<&'a ImageRecord>,
    selection: Selection,
}

impl<'a> BrowseSession<'a> {
    /// 絞り込み結果の `start` 番目を開いて開始
    pub fn open(
        catalog: &'a Catalog,
        filter: FilterState,
        options: MatchOptions,
        start: usize,
    ) -> Result<Self> {
        let list = filter_with(catalog, &filter, options);
        let selection = Selection::Closed.try_open_at(&list, start)?;
        Ok(Self {
            catalog,
            options,
            filter,
            list,
            selection,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn list(&self) -> &[&'a ImageRecord] {
        &self.list
    }

    pub fn view(&self) -> Option<ViewerView<'a>> {
        ViewerView::build(&self.list, &self.selection)
    }

    pub fn apply(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::Key(key) => {
                self.selection = key.apply(&self.selection, &self.list);
            }
            BrowseAction::Query(query) => {
                let next = self.filter.with_query(query);
                self.refilter(next);
            }
            BrowseAction::Category(category) => {
                let next = self.filter.with_category(category);
                self.refilter(next);
            }
        }
    }

    fn refilter(&mut self, filter: FilterState) {
        self.list = filter_with(self.catalog, &filter, self.options);
        self.filter = filter;
        self.selection = self.selection.reconcile(&self.list);
    }
}

/// 対話式ビューアを実行
pub fn run_browse(
    catalog: &Catalog,
    filter: FilterState,
    options: MatchOptions,
    start: usize,
) -> Result<()> {
    let initial = filter_with(catalog, &filter, options);
    if initial.is_empty() {
        println!("{}", EMPTY_STATE_MESSAGE);
        return Ok(());
    }

    let mut session = BrowseSession::open(catalog, filter, options, start)?;

    println!("操作: [Enter/n]次へ [p]前へ [/語]検索 [c カテゴリ]絞り込み [q]閉じる");
    println!("---\n");

    while let Some(view) = session.view() {
        println!("{}\n", format_viewer(&view));

        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GalleryError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            Some(action) => session.apply(action),
            None => println!("  → 不明な操作です\n"),
        }

        if !session.selection().is_open() && session.list().is_empty() {
            println!("{}", EMPTY_STATE_MESSAGE);
        }
    }

    println!("ビューアを閉じました");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action(""), Some(BrowseAction::Key(ViewerKey::Advance)));
        assert_eq!(parse_action("p"), Some(BrowseAction::Key(ViewerKey::Retreat)));
        assert_eq!(parse_action("q"), Some(BrowseAction::Key(ViewerKey::Dismiss)));
        assert_eq!(parse_action("/ sky "), Some(BrowseAction::Query("sky".into())));
        assert_eq!(parse_action("c People"), Some(BrowseAction::Category(Category::People)));
        assert_eq!(parse_action("c people"), None);
        assert_eq!(parse_action("zzz"), None);
    }

    #[test]
    fn test_session_open_out_of_range_is_error() {
        let catalog = catalog();
        let result = BrowseSession::open(
            &catalog,
            FilterState::new("", Category::Picasso),
            MatchOptions::default(),
            3,
        );
        assert!(matches!(
            result,
            Err(GalleryError::Catalog(gallery_common::Error::InvalidSelection { index: 3, len: 3 }))
        ));
    }

    #[test]
    fn test_session_wraps_forward_and_back() {
        let catalog = catalog();
        let mut session = BrowseSession::open(
            &catalog,
            FilterState::new("", Category::Picasso),
            MatchOptions::default(),
            2,
        )
        .unwrap();

        session.apply(BrowseAction::Key(ViewerKey::Advance));
        assert_eq!(session.view().unwrap().record.id, "pic-01");

        session.apply(BrowseAction::Key(ViewerKey::Retreat));
        assert_eq!(session.view().unwrap().record.id, "pic-03");
    }

    #[test]
    fn test_query_change_follows_open_item() {
        let catalog = catalog();
        // peo-04 は People の 4 番目
        let mut session = BrowseSession::open(
            &catalog,
            FilterState::new("", Category::People),
            MatchOptions::default(),
            3,
        )
        .unwrap();
        assert_eq!(session.view().unwrap().record.id, "peo-04");

        session.apply(BrowseAction::Query("smile".into()));
        let view = session.view().expect("ビューアが閉じた");
        assert_eq!(view.record.id, "peo-04");
        assert_eq!(session.selection().active_index(), Some(1));
    }

    #[test]
    fn test_query_change_closes_when_item_dropped() {
        let catalog = catalog();
        let mut session = BrowseSession::open(
            &catalog,
            FilterState::default(),
            MatchOptions::default(),
            0,
        )
        .unwrap();

        session.apply(BrowseAction::Category(Category::Abstract));
        assert!(!session.selection().is_open());
        assert!(session.view().is_none());
        assert_eq!(session.filter().category, Category::Abstract);
    }

    #[test]
    fn test_dismiss_closes_session() {
        let catalog = catalog();
        let mut session =
            BrowseSession::open(&catalog, FilterState::default(), MatchOptions::default(), 5)
                .unwrap();
        session.apply(BrowseAction::Key(ViewerKey::Dismiss));
        assert!(session.view().is_none());
    }
}
