//! ブラウザ側の表示効果（body のスクロールロック・テーマ属性）
//!
//! どちらも `ScopedEffect` で保持し、ガードを手放した時点で元に戻す。

use gallery_common::{PresentationEffect, ScopedEffect, Theme};
use gloo::utils::{body, document_element};

/// ビューア表示中に背後のページをスクロールさせない
pub struct BodyScrollLock;

impl PresentationEffect for BodyScrollLock {
    /// 適用前の `overflow`（インライン指定が無ければ空文字）
    type Saved = String;

    fn apply(&mut self) -> String {
        let style = body().style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        previous
    }

    fn restore(&mut self, saved: String) {
        let style = body().style();
        let _ = if saved.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &saved)
        };
    }
}

/// `<html data-theme="...">` を切り替える
pub struct ThemeAttribute(pub Theme);

pub const THEME_ATTRIBUTE: &str = "data-theme";

impl PresentationEffect for ThemeAttribute {
    type Saved = Option<String>;

    fn apply(&mut self) -> Option<String> {
        let root = document_element();
        let previous = root.get_attribute(THEME_ATTRIBUTE);
        let _ = root.set_attribute(THEME_ATTRIBUTE, self.0.as_str());
        previous
    }

    fn restore(&mut self, saved: Option<String>) {
        let root = document_element();
        let _ = match saved {
            Some(value) => root.set_attribute(THEME_ATTRIBUTE, &value),
            None => root.remove_attribute(THEME_ATTRIBUTE),
        };
    }
}

pub fn lock_scroll() -> ScopedEffect<BodyScrollLock> {
    ScopedEffect::acquire(BodyScrollLock)
}

pub fn apply_theme(theme: Theme) -> ScopedEffect<ThemeAttribute> {
    ScopedEffect::acquire(ThemeAttribute(theme))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_scroll_lock_restores_previous_overflow() {
        let style = body().style();
        style.set_property("overflow", "scroll").unwrap();

        let mut lock = lock_scroll();
        assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");
        lock.release();
        assert_eq!(style.get_property_value("overflow").unwrap(), "scroll");

        style.remove_property("overflow").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_theme_attribute_removed_on_drop() {
        let root = document_element();
        root.remove_attribute(THEME_ATTRIBUTE).unwrap();
        {
            let _theme = apply_theme(Theme::Dark);
            assert_eq!(root.get_attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
        }
        assert_eq!(root.get_attribute(THEME_ATTRIBUTE), None);
    }
}
