//! 端末向けの表示整形

use gallery_common::{Catalog, ImageRecord, ViewerView};

/// 一覧の1行
pub fn format_record_line(position: usize, record: &ImageRecord) -> String {
    let tags = if record.tags.is_empty() {
        String::new()
    } else {
        format!("  #{}", record.tags.join(" #"))
    };
    format!(
        "{:>3}. [{}] {:<12} {}{}",
        position + 1,
        record.category,
        record.id,
        record.display_title(),
        tags
    )
}

/// 詳細表示
pub fn format_record_detail(record: &ImageRecord) -> String {
    let mut lines = vec![
        format!("ID:       {}", record.id),
        format!("タイトル: {}", record.title.as_deref().unwrap_or("-")),
        format!("説明:     {}", record.alt),
        format!("カテゴリ: {}", record.category),
        format!(
            "タグ:     {}",
            if record.tags.is_empty() { "-".to_string() } else { record.tags.join(", ") }
        ),
        format!("画像:     {}", record.src),
        format!("代替画像: {}", record.fallback_src.as_deref().unwrap_or("-")),
    ];
    if let Some(author) = &record.author {
        lines.push(format!("作者:     {}", author));
    }
    if let Some(link) = &record.source_link {
        lines.push(format!("出典:     {}", link));
    }
    if let (Some(w), Some(h)) = (record.width, record.height) {
        lines.push(format!("サイズ:   {}x{}", w, h));
    }
    lines.join("\n")
}

/// ビューア表示（カウンタ付き）
pub fn format_viewer(view: &ViewerView<'_>) -> String {
    format!(
        "[{}] {}\n{}",
        view.counter_label(),
        view.record.display_title(),
        format_record_detail(view.record)
    )
}

/// カテゴリ一覧と件数
pub fn format_categories(catalog: &Catalog) -> String {
    catalog
        .category_counts()
        .iter()
        .map(|(category, count)| format!("{:<14}{:>4}件", category.as_str(), count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_common::{Category, Selection};

    fn sample() -> ImageRecord {
        ImageRecord::new(
            "nat-06",
            "Calm lake with pine trees reflection",
            Category::Nature,
            "lake.jpg",
        )
        .with_tags(["lake", "pine"])
    }

    #[test]
    fn test_format_record_line() {
        let line = format_record_line(0, &sample());
        assert!(line.starts_with("  1. [Nature] nat-06"));
        assert!(line.contains("Calm lake"));
        assert!(line.ends_with("#lake #pine"));
    }

    #[test]
    fn test_format_record_detail_placeholders() {
        let detail = format_record_detail(&sample());
        assert!(detail.contains("タイトル: -"));
        assert!(detail.contains("代替画像: -"));
        assert!(!detail.contains("作者"));
    }

    #[test]
    fn test_format_viewer_counter() {
        let record = sample();
        let list = vec![&record];
        let selection = Selection::Closed.open_at(&list, 0);
        let view = ViewerView::build(&list, &selection).unwrap();
        assert!(format_viewer(&view).starts_with("[1 / 1] Calm lake"));
    }

    #[test]
    fn test_format_categories_lists_all_first() {
        let catalog = Catalog::builtin().unwrap();
        let text = format_categories(&catalog);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("All"));
        assert!(first.contains("27件"));
    }
}
