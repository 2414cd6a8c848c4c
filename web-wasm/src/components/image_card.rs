//! 画像カード
//!
//! 読み込みに失敗したら代替URLへ1度だけ切り替える。

use gallery_common::view::is_card_activation_key;
use gallery_common::{CardView, ImageRecord, ImageSource};
use leptos::prelude::*;

#[component]
pub fn ImageCard<F>(record: ImageRecord, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let card = CardView::from_record(&record);
    let (source, set_source) = signal(ImageSource::for_record(&record));

    let id_click = card.id.clone();
    let on_open_click = on_open.clone();
    let id_key = card.id.clone();
    let aria_label = card.aria_label();
    let caption = card.title.clone().unwrap_or_else(|| card.alt.clone());

    view! {
        <figure
            class="image-card"
            class:broken=move || source.get().is_broken()
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=move |_| on_open_click(id_click.clone())
            on:keydown=move |ev| {
                if is_card_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_open(id_key.clone());
                }
            }
        >
            <img
                src=move || source.get().display_src().to_string()
                alt={card.alt.clone()}
                loading="lazy"
                on:error=move |_| set_source.update(|s| *s = s.on_error())
            />
            <figcaption>
                <span class="card-title">{caption}</span>
                <span class="card-category">{card.category.as_str()}</span>
            </figcaption>
        </figure>
    }
}
