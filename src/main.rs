use clap::Parser;
use gallery_common::{filter_with, CardView, FilterState, EMPTY_STATE_MESSAGE};
use gallery_viewer::{browse, cli, config, error, report, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::{GalleryError, Result};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "gallery_viewer=debug,gallery_common=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { query, category, json } => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let state = FilterState::new(query, category);
            let list = filter_with(&catalog, &state, config.match_options());

            if json {
                let cards: Vec<CardView> = gallery_common::view::cards(&list);
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else if list.is_empty() {
                println!("{}", EMPTY_STATE_MESSAGE);
            } else {
                for (i, record) in list.iter().enumerate() {
                    println!("{}", report::format_record_line(i, record));
                }
                println!("\n{} / {}件", list.len(), catalog.len());
            }
        }

        Commands::Show { id } => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let record = catalog
                .get(&id)
                .ok_or_else(|| GalleryError::RecordNotFound(id.clone()))?;
            println!("{}", report::format_record_detail(record));
        }

        Commands::Categories => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            println!("{}", report::format_categories(&catalog));
        }

        Commands::Browse { query, category, start } => {
            let catalog = config.load_catalog(cli.catalog.as_deref())?;
            let state = FilterState::new(query, category);
            browse::run_browse(&catalog, state, config.match_options(), start)?;
        }

        Commands::Scan { folder, category, output, recursive } => {
            println!("🖼  gallery - フォルダスキャン\n");

            println!("[1/2] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder, recursive)?;
            if images.is_empty() {
                return Err(GalleryError::NoImagesFound(folder.display().to_string()));
            }
            println!("✔ {}枚の画像を検出\n", images.len());

            println!("[2/2] カタログを生成中...");
            let output = output.unwrap_or_else(|| folder.join("catalog.json"));
            let base_dir = output
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let catalog = scanner::build_catalog(&images, category, base_dir)?;
            std::fs::write(&output, catalog.to_json_pretty()?)?;
            println!("✔ カタログを保存: {}", output.display());
        }

        Commands::Config { set_catalog, no_category_match, category_match, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
                changed = true;
            }
            if no_category_match {
                config.match_category_names = false;
                changed = true;
            }
            if category_match {
                config.match_category_names = true;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .resolve_catalog_path(cli.catalog.as_deref())
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".to_string())
                );
                println!(
                    "  カテゴリ名検索: {}",
                    if config.match_category_names { "有効" } else { "無効" }
                );
            }
        }
    }

    Ok(())
}
