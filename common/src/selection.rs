//! ビューア選択状態
//!
//! `Closed` と `Open { index, id }` の2状態。
//! `index` は常に「現在の絞り込み結果」への位置で、カタログ全体の位置ではない。
//! 遷移メソッドは `&self` を受け取り、新しい状態を返す（その場で書き換えない）。
//!
//! 範囲外の `open_at` や `Closed` での `next`/`previous` は呼び出し側のバグ。
//! デバッグビルドでは `debug_assert!` で落とし、リリースビルドでは何もしない。

use crate::catalog::Identified;
use crate::error::{Error, Result};

/// 選択状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open {
        /// 絞り込み結果内の位置
        index: usize,
        /// 開いた時点のレコードID（絞り込み変更時の追従に使う）
        id: String,
    },
}

impl Selection {
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    pub fn active_index(&self) -> Option<usize> {
        match self {
            Selection::Open { index, .. } => Some(*index),
            Selection::Closed => None,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        match self {
            Selection::Open { id, .. } => Some(id.as_str()),
            Selection::Closed => None,
        }
    }

    /// 開いているレコード
    ///
    /// 位置のレコードが開いた時の ID と違えば ID で引き直す
    /// （絞り込み直後でまだ `reconcile` されていない場合）。
    pub fn current<'a, T: Identified>(&self, list: &'a [T]) -> Option<&'a T> {
        let Selection::Open { index, id } = self else {
            return None;
        };
        match list.get(*index) {
            Some(item) if item.id() == id => Some(item),
            _ => list.iter().find(|item| item.id() == id),
        }
    }

    /// 位置 `index` を開く（範囲外ならエラー）
    pub fn try_open_at<T: Identified>(&self, list: &[T], index: usize) -> Result<Selection> {
        let item = list.get(index).ok_or(Error::InvalidSelection {
            index,
            len: list.len(),
        })?;
        tracing::debug!(index, id = item.id(), "viewer opened");
        Ok(Selection::Open {
            index,
            id: item.id().to_string(),
        })
    }

    /// 位置 `index` を開く
    pub fn open_at<T: Identified>(&self, list: &[T], index: usize) -> Selection {
        match self.try_open_at(list, index) {
            Ok(next) => next,
            Err(err) => {
                debug_assert!(false, "open_at: {}", err);
                tracing::warn!(%err, "open_at ignored");
                self.clone()
            }
        }
    }

    /// どの状態からでも `Closed` へ（何度呼んでもよい）
    pub fn close(&self) -> Selection {
        if self.is_open() {
            tracing::debug!("viewer closed");
        }
        Selection::Closed
    }

    /// 次へ（末尾の次は先頭）
    pub fn next<T: Identified>(&self, list: &[T]) -> Selection {
        self.step(list, Direction::Forward)
    }

    /// 前へ（先頭の前は末尾）
    pub fn previous<T: Identified>(&self, list: &[T]) -> Selection {
        self.step(list, Direction::Backward)
    }

    fn step<T: Identified>(&self, list: &[T], direction: Direction) -> Selection {
        let Some(index) = self.active_index() else {
            debug_assert!(false, "navigation while the viewer is closed");
            return Selection::Closed;
        };

        let len = list.len();
        if len == 0 {
            return Selection::Closed;
        }

        // 位置がずれていれば ID の現在位置から進める
        let index = match list.get(index) {
            Some(item) if Some(item.id()) == self.active_id() => index,
            _ => list
                .iter()
                .position(|item| Some(item.id()) == self.active_id())
                .unwrap_or(index),
        };

        let next = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index % len + len - 1) % len,
        };
        Selection::Open {
            index: next,
            id: list[next].id().to_string(),
        }
    }

    /// 絞り込み結果が変わったときの追従
    ///
    /// 開いていたレコードが新しいリストに残っていればその位置へ移り、
    /// なくなっていれば閉じる。
    pub fn reconcile<T: Identified>(&self, list: &[T]) -> Selection {
        let Selection::Open { index, id } = self else {
            return Selection::Closed;
        };

        match list.iter().position(|item| item.id() == id) {
            Some(new_index) if new_index == *index => self.clone(),
            Some(new_index) => {
                tracing::debug!(from = index, to = new_index, %id, "selection moved");
                Selection::Open {
                    index: new_index,
                    id: id.clone(),
                }
            }
            None => {
                tracing::debug!(%id, "selected item filtered out, closing viewer");
                Selection::Closed
            }
        }
    }

    /// ビューア描画用のナビゲーション情報
    pub fn navigation(&self, len: usize) -> NavigationInfo {
        let current_index = self.active_index().filter(|&i| i < len);
        let can_move = current_index.is_some() && len > 0;
        NavigationInfo {
            has_previous: can_move,
            has_next: can_move,
            current_index,
            total_count: len,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// ビューアのナビゲーション情報
///
/// 循環するので、開いていてリストが空でなければ前後とも常に true。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub has_previous: bool,
    pub has_next: bool,
    pub current_index: Option<usize>,
    pub total_count: usize,
}

impl NavigationInfo {
    /// "3 / 12" 形式の表示（1始まり）
    pub fn counter_label(&self) -> Option<String> {
        self.current_index
            .map(|i| format!("{} / {}", i + 1, self.total_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Identified for Item {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn list4() -> Vec<Item> {
        vec![Item("a"), Item("b"), Item("c"), Item("d")]
    }

    #[test]
    fn test_initial_state_is_closed() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.active_index(), None);
    }

    #[test]
    fn test_open_at_records_index_and_id() {
        let list = list4();
        let selection = Selection::Closed.open_at(&list, 2);
        assert_eq!(selection, Selection::Open { index: 2, id: "c".into() });
        assert_eq!(selection.current(&list).map(|i| i.0), Some("c"));
    }

    #[test]
    fn test_scenario_c_next_wraps_forward() {
        let list = list4();
        let selection = Selection::Closed.open_at(&list, 3).next(&list);
        assert_eq!(selection.active_index(), Some(0));
        assert_eq!(selection.active_id(), Some("a"));
    }

    #[test]
    fn test_scenario_d_previous_wraps_backward() {
        let list = list4();
        let selection = Selection::Closed.open_at(&list, 0).previous(&list);
        assert_eq!(selection.active_index(), Some(3));
        assert_eq!(selection.active_id(), Some("d"));
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        let list = list4();
        for i in 0..list.len() {
            let open = Selection::Closed.open_at(&list, i);
            assert_eq!(open.next(&list).previous(&list), open);
            assert_eq!(open.previous(&list).next(&list), open);
        }
    }

    #[test]
    fn test_n_steps_return_to_start() {
        let list = list4();
        for i in 0..list.len() {
            let start = Selection::Closed.open_at(&list, i);
            let mut selection = start.clone();
            for _ in 0..list.len() {
                selection = selection.next(&list);
            }
            assert_eq!(selection, start);
        }
    }

    #[test]
    fn test_single_item_list_wraps_to_itself() {
        let list = vec![Item("only")];
        let selection = Selection::Closed.open_at(&list, 0);
        assert_eq!(selection.next(&list), selection);
        assert_eq!(selection.previous(&list), selection);
    }

    #[test]
    fn test_close_is_idempotent() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 1);
        let closed = open.close();
        assert_eq!(closed, Selection::Closed);
        assert_eq!(closed.close(), Selection::Closed);
    }

    #[test]
    fn test_try_open_at_out_of_range() {
        let list = list4();
        let result = Selection::Closed.try_open_at(&list, 4);
        assert!(matches!(result, Err(Error::InvalidSelection { index: 4, len: 4 })));
    }

    #[test]
    fn test_try_open_at_empty_list() {
        let list: Vec<Item> = Vec::new();
        assert!(Selection::Closed.try_open_at(&list, 0).is_err());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "open_at")]
    fn test_open_at_out_of_range_asserts_in_debug() {
        let list = list4();
        let _ = Selection::Closed.open_at(&list, 9);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_open_at_out_of_range_is_noop_in_release() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 1);
        assert_eq!(open.open_at(&list, 9), open);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "closed")]
    fn test_next_while_closed_asserts_in_debug() {
        let list = list4();
        let _ = Selection::Closed.next(&list);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_next_while_closed_is_noop_in_release() {
        let list = list4();
        assert_eq!(Selection::Closed.next(&list), Selection::Closed);
    }

    #[test]
    fn test_step_on_empty_list_closes() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 1);
        let empty: Vec<Item> = Vec::new();
        assert_eq!(open.next(&empty), Selection::Closed);
        assert_eq!(open.previous(&empty), Selection::Closed);
    }

    #[test]
    fn test_step_with_stale_index_stays_in_range() {
        // 開いた後にリストが縮んだ場合でも範囲内に収まる
        let list = list4();
        let open = Selection::Closed.open_at(&list, 3);
        let shorter = vec![Item("a"), Item("b")];
        let next = open.next(&shorter);
        assert!(next.active_index().unwrap() < shorter.len());
        let prev = open.previous(&shorter);
        assert!(prev.active_index().unwrap() < shorter.len());
    }

    #[test]
    fn test_current_resolves_by_id_before_reconcile() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 2);

        // "c" が先頭へ移動したリスト
        let reordered = vec![Item("c"), Item("a"), Item("b")];
        assert_eq!(open.current(&reordered).map(|i| i.0), Some("c"));

        // "c" が無いリストでは位置 2 の別レコードを返さない
        let without = vec![Item("a"), Item("b"), Item("d")];
        assert!(open.current(&without).is_none());
    }

    #[test]
    fn test_step_from_moved_item_uses_its_new_position() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 2);
        let reordered = vec![Item("c"), Item("a"), Item("b")];
        assert_eq!(open.next(&reordered).active_id(), Some("a"));
        assert_eq!(open.previous(&reordered).active_id(), Some("b"));
    }

    #[test]
    fn test_reconcile_follows_item_to_new_position() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 2);
        let narrowed = vec![Item("b"), Item("c")];
        let reconciled = open.reconcile(&narrowed);
        assert_eq!(reconciled, Selection::Open { index: 1, id: "c".into() });
    }

    #[test]
    fn test_reconcile_closes_when_item_filtered_out() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 0);
        let narrowed = vec![Item("b"), Item("c")];
        assert_eq!(open.reconcile(&narrowed), Selection::Closed);
    }

    #[test]
    fn test_reconcile_keeps_closed() {
        let list = list4();
        assert_eq!(Selection::Closed.reconcile(&list), Selection::Closed);
    }

    #[test]
    fn test_navigation_info() {
        let list = list4();
        let open = Selection::Closed.open_at(&list, 0);
        let nav = open.navigation(list.len());
        assert!(nav.has_previous && nav.has_next);
        assert_eq!(nav.counter_label().as_deref(), Some("1 / 4"));

        let closed = Selection::Closed.navigation(list.len());
        assert!(!closed.has_previous && !closed.has_next);
        assert_eq!(closed.counter_label(), None);
    }
}
