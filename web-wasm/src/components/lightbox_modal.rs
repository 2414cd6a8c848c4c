//! ライトボックス（拡大表示）
//!
//! 開いている間だけマウントされる。マウント中は
//! - body のスクロールをロック
//! - Escape / ← / → をウィンドウ全体で横取り
//! し、閉じる・再描画で外されるのどちらの経路でも `on_cleanup` で元に戻す。

use crate::dom;
use gallery_common::{Credit, ImageRecord, ImageSource, Selection, ViewerKey};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn LightboxModal(
    images: Memo<Vec<ImageRecord>>,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    let scroll_lock = dom::lock_scroll();

    let apply_key = move |key: ViewerKey| {
        let next = images.with_untracked(|list| selection.with_untracked(|s| key.apply(s, list)));
        tracing::debug!(?key, active = ?next.active_id(), "viewer key");
        selection.set(next);
    };

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if let Some(key) = ViewerKey::from_key_name(&ev.key()) {
            ev.prevent_default();
            apply_key(key);
        }
    });

    on_cleanup(move || {
        key_listener.remove();
        drop(scroll_lock);
    });

    let close_ref = NodeRef::<html::Button>::new();
    Effect::new(move |_| {
        if let Some(button) = close_ref.get() {
            let _ = button.focus();
        }
    });

    let current = Memo::new(move |_| {
        images.with(|list| selection.with(|s| s.current(list).cloned()))
    });
    let counter = move || {
        images.with(|list| {
            selection.with(|s| s.reconcile(list).navigation(list.len()).counter_label())
        })
    };

    view! {
        <div
            class="lightbox-backdrop"
            on:click=move |ev| {
                // 背景そのもののクリックだけで閉じる
                if ev.target() == ev.current_target() {
                    apply_key(ViewerKey::Dismiss);
                }
            }
        >
            <div
                class="lightbox"
                role="dialog"
                aria-modal="true"
                aria-labelledby="lightbox-title"
            >
                <button
                    type="button"
                    class="lightbox-close"
                    aria-label="Close"
                    node_ref=close_ref
                    on:click=move |_| apply_key(ViewerKey::Dismiss)
                >
                    "✕"
                </button>

                <button
                    type="button"
                    class="lightbox-nav prev"
                    aria-label="Previous image"
                    on:click=move |_| apply_key(ViewerKey::Retreat)
                >
                    "‹"
                </button>

                {move || current.get().map(|record| view! { <ViewerImage record=record /> })}

                <button
                    type="button"
                    class="lightbox-nav next"
                    aria-label="Next image"
                    on:click=move |_| apply_key(ViewerKey::Advance)
                >
                    "›"
                </button>

                <p class="lightbox-counter" aria-live="polite">{counter}</p>
            </div>
        </div>
    }
}

/// 1枚分の表示（レコードが変わるたびに作り直し、フォールバック状態も初期化）
#[component]
fn ViewerImage(record: ImageRecord) -> impl IntoView {
    let (source, set_source) = signal(ImageSource::for_record(&record));
    let title = record.display_title().to_string();
    let credit = Credit::from_record(&record);

    view! {
        <figure class="lightbox-figure">
            <img
                src=move || source.get().display_src().to_string()
                alt={record.alt.clone()}
                class:broken=move || source.get().is_broken()
                on:error=move |_| set_source.update(|s| *s = s.on_error())
            />
            <figcaption>
                <h2 id="lightbox-title">{title}</h2>
                <p class="lightbox-category">{record.category.as_str()}</p>
                <ul class="lightbox-tags">
                    {record
                        .tags
                        .iter()
                        .map(|tag| view! { <li>{tag.clone()}</li> })
                        .collect_view()}
                </ul>
                {credit.map(|credit| {
                    view! {
                        <p class="lightbox-credit">
                            {credit.author.map(|author| view! { <span>"Photo: " {author}</span> })}
                            {credit.source_link.map(|link| {
                                view! {
                                    <a href=link target="_blank" rel="noopener noreferrer">
                                        "Source"
                                    </a>
                                }
                            })}
                        </p>
                    }
                })}
            </figcaption>
        </figure>
    }
}
