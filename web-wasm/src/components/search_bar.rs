//! 検索バー（キーワード・カテゴリ・クリア）

use gallery_common::{Category, FilterState};
use leptos::prelude::*;

#[component]
pub fn SearchBar(filter: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <div class="search-bar" role="search">
            <input
                type="search"
                id="search"
                placeholder="Search by title, tag or description..."
                aria-label="Search images"
                prop:value=move || filter.get().query
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    filter.update(|f| *f = f.with_query(query));
                }
            />

            <select
                id="category"
                aria-label="Filter by category"
                prop:value=move || filter.get().category.as_str()
                on:change=move |ev| {
                    if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                        filter.update(|f| *f = f.with_category(category));
                    }
                }
            >
                {Category::ALL_CATEGORIES
                    .into_iter()
                    .map(|category| {
                        view! { <option value={category.as_str()}>{category.as_str()}</option> }
                    })
                    .collect_view()}
            </select>

            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || !filter.get().is_active()
                on:click=move |_| filter.update(|f| *f = f.cleared())
            >
                "Clear"
            </button>
        </div>
    }
}
