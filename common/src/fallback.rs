//! 画像読み込み失敗時のフォールバック
//!
//! 表示要素ごとに、最初の失敗でのみ `fallback_src` へ差し替える。
//! 2回目以降の失敗では何もしない（再試行ループを作らない）。

use crate::catalog::ImageRecord;

/// 表示中のソース
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Primary,
    Fallback,
    /// これ以上差し替えない
    Broken,
}

/// 1つの表示要素（カード・ビューア）が持つ画像ソース状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: Option<String>,
    state: SourceState,
    /// `Broken` でも表示し続けるソース
    shown: ShownSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShownSource {
    Primary,
    Fallback,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.filter(|f| !f.trim().is_empty()),
            state: SourceState::Primary,
            shown: ShownSource::Primary,
        }
    }

    pub fn for_record(record: &ImageRecord) -> Self {
        Self::new(record.src.clone(), record.fallback_src.clone())
    }

    pub fn state(&self) -> SourceState {
        self.state
    }

    /// 現在 `<img src>` に渡すべきソース
    pub fn display_src(&self) -> &str {
        match (self.shown, self.fallback.as_deref()) {
            (ShownSource::Fallback, Some(fallback)) => fallback,
            _ => &self.primary,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.state == SourceState::Broken
    }

    /// フォールバックへ差し替え済みか
    pub fn swapped(&self) -> bool {
        self.shown == ShownSource::Fallback
    }

    /// 読み込み失敗の通知を受けて次の状態を返す
    pub fn on_error(&self) -> ImageSource {
        let mut next = self.clone();
        match (self.state, self.fallback.is_some()) {
            (SourceState::Primary, true) => {
                tracing::debug!(primary = %self.primary, "image failed, using fallback");
                next.state = SourceState::Fallback;
                next.shown = ShownSource::Fallback;
            }
            (SourceState::Primary, false) => {
                tracing::debug!(primary = %self.primary, "image failed, no fallback");
                next.state = SourceState::Broken;
            }
            (SourceState::Fallback, _) => {
                tracing::debug!(primary = %self.primary, "fallback image failed");
                next.state = SourceState::Broken;
            }
            (SourceState::Broken, _) => {}
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_initial_source_is_primary() {
        let source = ImageSource::new("a.jpg", Some("b.jpg".into()));
        assert_eq!(source.display_src(), "a.jpg");
        assert_eq!(source.state(), SourceState::Primary);
        assert!(!source.swapped());
    }

    #[test]
    fn test_scenario_e_single_swap() {
        let source = ImageSource::new("a.jpg", Some("b.jpg".into()));

        let first = source.on_error();
        assert_eq!(first.display_src(), "b.jpg");
        assert_eq!(first.state(), SourceState::Fallback);
        assert!(first.swapped());

        let second = first.on_error();
        assert_eq!(second.display_src(), "b.jpg");
        assert!(second.is_broken());

        let third = second.on_error();
        assert_eq!(third, second);
    }

    #[test]
    fn test_missing_fallback_goes_straight_to_broken() {
        let source = ImageSource::new("a.jpg", None);
        let failed = source.on_error();
        assert!(failed.is_broken());
        assert_eq!(failed.display_src(), "a.jpg");
        assert!(!failed.swapped());
    }

    #[test]
    fn test_blank_fallback_is_treated_as_missing() {
        let source = ImageSource::new("a.jpg", Some("  ".into()));
        assert!(source.on_error().is_broken());
    }

    #[test]
    fn test_for_record_uses_record_sources() {
        let record = ImageRecord::new("x", "alt", Category::Nature, "p.jpg").with_fallback("f.jpg");
        let source = ImageSource::for_record(&record);
        assert_eq!(source.display_src(), "p.jpg");
        assert_eq!(source.on_error().display_src(), "f.jpg");
    }
}
