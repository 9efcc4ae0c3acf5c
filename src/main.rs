use clap::Parser;
use material_lookup::{cli, error, import, logging, report};
use material_lookup_common::documents::open_route_message;
use material_lookup_common::{check_storage_access, format_code, AppConfig, DesktopStorage, Lookup, SystemOpener};
use cli::{Cli, Commands, DocumentSlot};
use error::{LookupError, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = AppConfig::load()?;

    match cli.command {
        Commands::Config { set_assets, set_document, show } => {
            run_config(config, set_assets, set_document, show)
        }
        command => {
            if let Some(root) = cli.assets {
                config.assets_root = root;
            }
            run_command(command, &config)
        }
    }
}

fn run_command(command: Commands, config: &AppConfig) -> Result<()> {
    if !check_storage_access(&DesktopStorage::new(&config.assets_root)) {
        println!("⚠ アセットフォルダにアクセスできません: {}", config.assets_root.display());
    }

    let lookup = Lookup::from_config(config);

    match command {
        Commands::Search { code } => {
            println!("🔎 material-lookup - 検索\n");
            let (description, additional) = lookup.catalog.search(&code);
            println!("  コード: {}", format_code(&code));
            println!("  Descrição: {}", description);
            println!("  Adicionais: {}", additional);
        }

        Commands::Photos { code } => {
            println!("📷 material-lookup - 写真\n");
            report::print_photos(&lookup.photos.find(&code));
        }

        Commands::Docs { code, open } => {
            println!("📄 material-lookup - 参考資料\n");
            let (_, additional) = lookup.catalog.search(&code);
            let route = lookup.documents.route(&additional);
            println!("  Adicionais: {}", additional);
            report::print_route(&route);
            if open {
                println!("  {}", open_route_message(&route, &SystemOpener));
            }
        }

        Commands::Lookup { code, json } => {
            let report = report::run_lookup(&lookup, &code);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🚀 material-lookup - 一括表示\n");
                report::print_report(&report);
            }
        }

        Commands::Interactive => {
            println!("💬 material-lookup - 対話モード\n");
            report::run_interactive(&lookup, &SystemOpener)?;
        }

        Commands::Import { input, output, sheet, force } => {
            println!("📥 material-lookup - Excel取り込み\n");
            let output = output.unwrap_or_else(|| config.catalog_path());
            let summary = import::import_workbook(&input, sheet.as_deref(), &output, force)?;
            println!("✔ {}件を書き出しました ({}行スキップ)", summary.records, summary.skipped);
            println!("✔ 保存先: {}", summary.output.display());
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn run_config(
    mut config: AppConfig,
    set_assets: Option<PathBuf>,
    set_document: Option<Vec<String>>,
    show: bool,
) -> Result<()> {
    if let Some(root) = set_assets {
        config.assets_root = root;
        config.save()?;
        println!("✔ アセットフォルダを設定しました: {}", config.assets_root.display());
    }

    if let Some(args) = set_document {
        let [slot, path] = args.as_slice() else {
            return Err(LookupError::Config("--set-document には KIND と PATH が必要です".into()));
        };
        let slot: DocumentSlot = slot.parse().map_err(LookupError::Config)?;
        match slot {
            DocumentSlot::Haste => config.haste_document = path.clone(),
            DocumentSlot::Tubo => config.tubo_document = path.clone(),
            DocumentSlot::Default => config.default_document = path.clone(),
        }
        config.save()?;
        println!("✔ 資料を設定しました");
    }

    if show {
        println!("設定:");
        println!("  アセット: {}", config.assets_root.display());
        println!("  カタログ: {}", config.catalog_path().display());
        println!("  Haste資料: {}", config.haste_document);
        println!("  Tubo資料: {}", config.tubo_document);
        println!(
            "  既定資料: {}",
            if config.default_document.is_empty() { "未設定" } else { config.default_document.as_str() }
        );
        println!("  ズーム: {}〜{} (刻み {})", config.zoom_min, config.zoom_max, config.zoom_step);
    }

    Ok(())
}
