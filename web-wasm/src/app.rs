//! メインアプリケーションコンポーネント

use crate::components::{
    gallery_grid::GalleryGrid, header::Header, lightbox_modal::LightboxModal,
    search_bar::SearchBar,
};
use crate::dom::{self, ThemeAttribute};
use gallery_common::{
    filter_with, Catalog, FilterState, ImageRecord, MatchOptions, ScopedEffect, Selection,
    Theme,
};
use leptos::prelude::*;

/// カードの id から選択状態を作る（絞り込み結果に無ければ None）
pub fn open_by_id(list: &[ImageRecord], id: &str) -> Option<Selection> {
    let index = list.iter().position(|record| record.id == id)?;
    Some(Selection::Closed.open_at(list, index))
}

#[component]
pub fn App() -> impl IntoView {
    match Catalog::builtin() {
        Ok(catalog) => view! { <Gallery catalog=catalog /> }.into_any(),
        Err(err) => {
            web_sys::console::error_1(&format!("カタログの読み込みに失敗: {}", err).into());
            view! {
                <p class="load-error" role="alert">"The image catalog could not be loaded."</p>
            }
            .into_any()
        }
    }
}

#[component]
fn Gallery(catalog: Catalog) -> impl IntoView {
    // 状態はここで一括所有し、遷移のたびに丸ごと置き換える
    let filter = RwSignal::new(FilterState::default());
    let selection = RwSignal::new(Selection::Closed);
    let (theme, set_theme) = signal(Theme::default());
    let total = catalog.len();

    let images = Memo::new(move |_| {
        filter.with(|state| {
            filter_with(&catalog, state, MatchOptions::default())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    // 表示中の画像が絞り込みで移動・消失した場合の追従
    Effect::new(move |_| {
        images.with(|list| {
            let current = selection.get_untracked();
            let next = current.reconcile(list);
            if next != current {
                selection.set(next);
            }
        });
    });

    // 前回のガードを戻してから新しいテーマを適用
    Effect::new(move |previous: Option<ScopedEffect<ThemeAttribute>>| {
        drop(previous);
        dom::apply_theme(theme.get())
    });

    let on_open = move |id: String| {
        if let Some(next) = images.with_untracked(|list| open_by_id(list, &id)) {
            tracing::debug!(%id, "open viewer");
            selection.set(next);
        }
    };

    let on_toggle_theme = move |_| set_theme.update(|t| *t = t.toggled());

    view! {
        <div class="container">
            <Header theme=theme on_toggle_theme=on_toggle_theme />

            <main>
                <SearchBar filter=filter />

                <p class="result-count">
                    {move || format!("{} / {} images", images.with(Vec::len), total)}
                </p>

                <GalleryGrid images=images on_open=on_open />
            </main>

            <Show when=move || selection.with(Selection::is_open)>
                <LightboxModal images=images selection=selection />
            </Show>
        </div>
    }
}
