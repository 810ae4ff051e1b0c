use address_common::{resolve_row, simplify, ExceptionRules, RowOutcome};
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use taoyuan_address_finder::{cli, config, interactive, launcher, lookup, runner, workbook};

use cli::{Cli, Commands};
use config::Config;
use lookup::CommandLookup;
use runner::RunOptions;
use workbook::AddressSheet;

fn load_rules(path: &Path) -> anyhow::Result<ExceptionRules> {
    let rules = ExceptionRules::load(path)
        .with_context(|| format!("例外ルールの読み込みに失敗: {}", path.display()))?;
    Ok(rules)
}

fn run_options(config: &Config, interval: Option<u64>, verbose: bool) -> RunOptions {
    RunOptions {
        city_name: config.city_name.clone(),
        pad_width: config.pad_width,
        query_interval: Duration::from_secs(interval.unwrap_or(config.query_interval_seconds)),
        verbose,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { file, output, rules, interval, no_backup, no_open } => {
            println!("📍 address-finder - 一括查詢\n");

            let rules_path = rules.as_deref().unwrap_or(config.exception_rules_path.as_path());
            let rules = load_rules(rules_path)?;
            if cli.verbose {
                println!("  例外里: {:?}", rules.require_ling);
            }

            // 1. Excel読み込み
            println!("[1/3] Excelを読み込み中...");
            let mut sheet = AddressSheet::open(&file)
                .with_context(|| format!("Excelを開けません: {}", file.display()))?;
            println!("✔ {}件の住所を検出\n", sheet.input_addresses().len());

            match output {
                Some(output) => sheet.set_path(output),
                None if !no_backup => {
                    let backup = workbook::backup(&file)?;
                    println!("✔ バックアップ: {}\n", backup.display());
                }
                None => {}
            }

            // 2. 查詢
            println!("[2/3] 查詢中...");
            let mut lookup = CommandLookup::from_config(&config)?;
            let options = run_options(&config, interval, cli.verbose);
            let summary = runner::run_sheet(&mut sheet, &mut lookup, &rules, &options).await?;

            // 3. 集計
            println!("\n[3/3] 集計");
            println!("  總數: {}", summary.total);
            println!("  成功: {}", summary.found);
            println!("  查無結果: {}", summary.not_found);
            println!("  查詢失敗: {}", summary.failed);
            println!("  空白資料: {}", summary.blank);
            println!("\n✅ 全部完成，請查看：{}", sheet.path().display());

            if config.open_after_run && !no_open {
                if let Err(e) = launcher::open_file(sheet.path()) {
                    eprintln!("⚠ {}", e);
                }
            }
        }

        Commands::Single { rules } => {
            let rules_path = rules.as_deref().unwrap_or(config.exception_rules_path.as_path());
            let rules = load_rules(rules_path)?;
            let mut lookup = CommandLookup::from_config(&config)?;
            let options = run_options(&config, Some(0), cli.verbose);
            interactive::run_interactive(&mut lookup, &rules, &options).await?;
        }

        Commands::Simplify { address, rules } => {
            let rules_path = rules.as_deref().unwrap_or(config.exception_rules_path.as_path());
            let rules = load_rules(rules_path)?;
            let simplified = simplify(&address);
            let record = resolve_row(
                Some(&simplified),
                &address,
                RowOutcome::Found(simplified.query.clone()),
                &rules,
                &config.city_name,
            );

            println!("原地址:   {}", simplified.original);
            println!("查詢地址: {}", simplified.query);
            println!("後綴:     {}", simplified.suffix);
            println!("完整地址: {}", record.full_address);
            println!("不含鄰:   {}", record.short_address);
        }

        Commands::Config { set_lookup_command, show } => {
            let mut config = config;

            if let Some(command) = set_lookup_command {
                config.set_lookup_command(command)?;
                println!("✔ 查詢コマンドを設定しました");
            }

            if show {
                println!("設定:");
                println!("  查詢コマンド: {}", config.lookup_command.as_deref().unwrap_or("未設定"));
                println!("  引数: {}", config.lookup_args.join(" "));
                println!("  查詢URL: {}", config.lookup_url);
                println!("  タイムアウト: {}秒", config.lookup_timeout_seconds);
                println!("  查詢間隔: {}秒", config.query_interval_seconds);
                println!("  市名: {}", config.city_name);
                println!("  例外ルール: {}", config.exception_rules_path.display());
            }
        }
    }

    Ok(())
}
