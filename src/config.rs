use crate::error::{GalleryError, Result};
use gallery_common::{Catalog, MatchOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "GALLERY_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 未設定なら組み込みカタログ
    pub catalog_path: Option<PathBuf>,
    /// カテゴリ名も検索対象にする
    pub match_category_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_category_names: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("gallery-viewer").join("config.json"))
    }

    /// 有効なカタログパス（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        self.catalog_path.clone()
    }

    pub fn load_catalog(&self, cli_override: Option<&Path>) -> Result<Catalog> {
        match self.resolve_catalog_path(cli_override) {
            Some(path) => {
                if !path.exists() {
                    return Err(GalleryError::Config(format!(
                        "カタログファイルが見つかりません: {}",
                        path.display()
                    )));
                }
                tracing::info!(path = %path.display(), "loading catalog");
                Ok(Catalog::load(&path)?)
            }
            None => Ok(Catalog::builtin()?),
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            match_category_names: self.match_category_names,
        }
    }
}
