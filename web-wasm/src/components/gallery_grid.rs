//! 画像グリッド（空の場合は空状態メッセージ）

use gallery_common::{ImageRecord, EMPTY_STATE_MESSAGE};
use leptos::prelude::*;

use super::image_card::ImageCard;

#[component]
pub fn GalleryGrid<F>(images: Memo<Vec<ImageRecord>>, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <Show
            when=move || !images.get().is_empty()
            fallback=|| view! {
                <p class="empty-state" role="status" aria-live="polite">{EMPTY_STATE_MESSAGE}</p>
            }
        >
            <div class="gallery-grid">
                <For
                    each=move || images.get()
                    key=|record| record.id.clone()
                    children={
                        let on_open = on_open.clone();
                        move |record| {
                            let on_open = on_open.clone();
                            view! { <ImageCard record=record on_open=on_open /> }
                        }
                    }
                />
            </div>
        </Show>
    }
}
