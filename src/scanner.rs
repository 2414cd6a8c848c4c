//! ローカル画像フォルダのスキャン
//!
//! 画像ファイルごとにカタログレコードを作る。ID はファイル名（拡張子なし）、
//! alt はファイル名を読みやすくしたもの、幅と高さは画像ヘッダから取得。

use crate::error::{GalleryError, Result};
use gallery_common::{Catalog, Category, ImageRecord};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
}

fn is_image_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&lower.as_str())
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageFile>> {
    if !folder.exists() {
        return Err(GalleryError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_image {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        images.push(ImageFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!(folder = %folder.display(), count = images.len(), "scan complete");

    Ok(images)
}

/// "girl-with_mandolin" → "girl with mandolin"
fn humanize(stem: &str) -> String {
    let words: Vec<&str> = stem
        .split(|c: char| c == '-' || c == '_')
        .filter(|s| !s.is_empty())
        .collect();
    if words.is_empty() {
        stem.to_string()
    } else {
        words.join(" ")
    }
}

/// 同じ ID が出たら "-2", "-3" を付けて一意にする
fn unique_id(stem: &str, taken: &mut std::collections::HashSet<String>) -> String {
    let base = stem.to_lowercase().replace(' ', "-");
    let mut candidate = base.clone();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    candidate
}

/// スキャン結果からカタログを構築（`src` はカタログ出力先からの相対パス）
pub fn build_catalog(images: &[ImageFile], category: Category, base_dir: &Path) -> Result<Catalog> {
    let mut taken = std::collections::HashSet::new();
    let mut records = Vec::with_capacity(images.len());

    for file in images {
        let stem = file
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file.file_name.clone());

        let src = file
            .path
            .strip_prefix(base_dir)
            .unwrap_or(&file.path)
            .to_string_lossy()
            .replace('\\', "/");

        let mut record =
            ImageRecord::new(unique_id(&stem, &mut taken), humanize(&stem), category, src);
        match image::image_dimensions(&file.path) {
            Ok((width, height)) => {
                record.width = Some(width);
                record.height = Some(height);
            }
            Err(e) => {
                // サイズはヒントなので読めなくても続行
                tracing::warn!(
                    file = %file.file_name,
                    error = %e,
                    "could not read image dimensions"
                );
            }
        }
        records.push(record);
    }

    Ok(Catalog::new(records)?)
}
