//! ヘッダーコンポーネント

use gallery_common::Theme;
use leptos::prelude::*;

#[component]
pub fn Header<F>(theme: ReadSignal<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"Ocean Gallery"</h1>
            <button
                type="button"
                class="theme-toggle"
                aria-label=move || format!("Switch to {} theme", theme.get().toggled())
                on:click=move |_| on_toggle_theme(())
            >
                {move || match theme.get() {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                }}
            </button>
        </header>
    }
}
