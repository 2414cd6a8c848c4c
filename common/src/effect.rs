//! 画面全体に及ぶ表示状態（スクロールロック・テーマ属性など）
//!
//! 適用と復元を1組のガードで扱う。`release()` か `Drop` のどちらかで
//! 必ず一度だけ元の状態へ戻る。

/// 適用と復元の対になる副作用
pub trait PresentationEffect {
    /// 復元に必要な適用前の状態
    type Saved;

    fn apply(&mut self) -> Self::Saved;

    fn restore(&mut self, saved: Self::Saved);
}

/// 副作用を保持している間だけ有効なガード
pub struct ScopedEffect<E: PresentationEffect> {
    effect: E,
    saved: Option<E::Saved>,
}

impl<E: PresentationEffect> ScopedEffect<E> {
    pub fn acquire(mut effect: E) -> Self {
        let saved = effect.apply();
        Self {
            effect,
            saved: Some(saved),
        }
    }

    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// 明示的に復元（2回目以降は何もしない）
    pub fn release(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.effect.restore(saved);
        }
    }
}

impl<E: PresentationEffect> Drop for ScopedEffect<E> {
    fn drop(&mut self) {
        self.release();
    }
}

/// 配色テーマ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
