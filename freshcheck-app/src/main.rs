//! freshcheck CLI: assess food photos, manage the fridge ledger, browse the
//! ingredient catalog. Config from env (.env supported) and CLI args.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, TimeZone, Timelike};
use clap::{Parser, Subcommand};

use freshcheck_app::{load_location, recipes, AppConfig, AppError, AppState};
use freshcheck_core::{
    catalog, init_tracing, now_ms, parse_shelf_life_days, suggested_unit, DiagnosticTier,
    HistoryItem, IngredientCategory, IngredientEntry, QuantityChange, Region, StorageZone,
    DEFAULT_SHELF_LIFE_DAYS,
};
use storage::SqliteKvStore;
use vision_client::{AssessmentOutcome, FreshnessAnalyzer, OpenAiVisionClient};

#[derive(Parser)]
#[command(name = "freshcheck")]
#[command(about = "FreshCheck CLI: 拍照识鲜、冰箱库存、食材图鉴", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a food photo and record the result in history.
    Assess {
        /// Path to a JPEG photo of the ingredient.
        #[arg(short, long)]
        image: PathBuf,
        /// Also stock the result into the fridge.
        #[arg(long)]
        add: bool,
        /// Storage zone for --add (fridge|freezer); defaults by category.
        #[arg(long)]
        zone: Option<StorageZone>,
        /// Quantity for --add; at least 1.
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,
        /// Quantity unit for --add; defaults by category.
        #[arg(long)]
        unit: Option<String>,
    },
    /// Fridge inventory: list, show, add, use, restock, remove.
    Fridge {
        #[command(subcommand)]
        command: FridgeCommands,
    },
    /// Assessment history: list, show, report, clear.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// 食材图鉴: search entries, show per-tier diagnostics.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Home board: near-expiry items plus a recipe suggestion.
    Home,
    /// Print the disclaimer; --accept records agreement.
    Consent {
        #[arg(long)]
        accept: bool,
    },
}

#[derive(Subcommand)]
enum FridgeCommands {
    /// List stocked items with their time-derived status.
    List {
        /// Restrict to one zone (fridge|freezer).
        #[arg(long)]
        zone: Option<StorageZone>,
    },
    /// Show one stocked item in full.
    Show { id: String },
    /// Stock an item by hand; catalog entries fill category, icon and shelf life.
    Add {
        #[arg(long)]
        name: String,
        /// Category label such as 叶菜类; defaults to the catalog entry's.
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        zone: Option<StorageZone>,
        /// Starting quantity; at least 1.
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,
        #[arg(long, default_value = "份")]
        unit: String,
        /// Shelf life in days; defaults to the catalog entry's typical life.
        #[arg(long)]
        days: Option<i64>,
    },
    /// Consume stock; the item is removed when it reaches zero.
    Use {
        id: String,
        /// Portions to consume; at least 1.
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..))]
        count: i64,
    },
    /// Add stock to an existing item.
    Restock {
        id: String,
        /// Portions to add; at least 1.
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..))]
        count: i64,
    },
    /// Drop an item regardless of its remaining quantity.
    Remove { id: String },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List past assessments, newest first.
    List,
    /// Show one assessment in full.
    Show { id: String },
    /// File a misidentification report against an assessment.
    Report { id: String },
    /// Delete all history.
    Clear,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Search entries by name or category substring. No query lists everything.
    Search {
        query: Option<String>,
        /// Restrict to one category label such as 菌菇类.
        #[arg(long)]
        category: Option<IngredientCategory>,
    },
    /// Show an entry with its 3-tier diagnostic.
    Show { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&config.log_file)?;

    let store = SqliteKvStore::new(&config.database_url)
        .await
        .context("Open the FreshCheck database (check FRESHCHECK_DB)")?;
    let mut state = AppState::load(Arc::new(store), load_location()).await?;

    // The whole app sits behind the terms modal in the original.
    if !state.consent() && !matches!(cli.command, Commands::Consent { .. }) {
        print_disclaimer();
        println!("\n尚未记录同意状态。请先运行: freshcheck consent --accept");
        return Ok(());
    }

    match cli.command {
        Commands::Assess {
            image,
            add,
            zone,
            quantity,
            unit,
        } => handle_assess(&config, &mut state, &image, add, zone, quantity, unit).await,
        Commands::Fridge { command } => handle_fridge(&mut state, command).await,
        Commands::History { command } => handle_history(&mut state, command).await,
        Commands::Catalog { command } => handle_catalog(command),
        Commands::Home => handle_home(&state),
        Commands::Consent { accept } => handle_consent(&mut state, accept).await,
    }
}

/// Runs the vision assessment for one image file and records the outcome.
/// A degraded (fallback) outcome is still recorded, flagged on the way out.
async fn handle_assess(
    config: &AppConfig,
    state: &mut AppState,
    image: &Path,
    add: bool,
    zone: Option<StorageZone>,
    quantity: i64,
    unit: Option<String>,
) -> Result<()> {
    let api_key = config.require_api_key()?;
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("Read image file {}", image.display()))?;

    let client = OpenAiVisionClient::with_base_url(api_key.to_string(), config.openai_base_url.clone())
        .with_model(config.vision_model.clone());

    println!("正在分析食材照片...");
    let outcome = client.analyze(&bytes).await;
    if let AssessmentOutcome::Fallback { reason, .. } = &outcome {
        println!("⚠️ 识别降级（{reason}），以下为保守的默认判断。");
    }

    let stored = state
        .record_assessment(outcome.into_record(), Some(image.display().to_string()))
        .await?;
    print_assessment(&stored);

    if add {
        let mut source = stored.record.clone();
        if source.icon.is_empty() {
            source.icon = icon_for_category(&source.category).to_string();
        }
        let zone = zone.unwrap_or_else(|| StorageZone::suggested_for_category(&source.category));
        let unit = unit.unwrap_or_else(|| suggested_unit(&source.category).to_string());
        let item = state
            .add_from_assessment(&source, zone, quantity, &unit)
            .await?;
        println!(
            "\n已存入电子清单: {} {} ×{}{} [{}] 预计保持 {} 天 (id: {})",
            item.icon,
            item.name,
            item.quantity,
            item.unit,
            item.zone.label(),
            item.remaining_days,
            item.id
        );
    }
    Ok(())
}

async fn handle_fridge(state: &mut AppState, command: FridgeCommands) -> Result<()> {
    match command {
        FridgeCommands::List { zone } => {
            let now = now_ms();
            let items = match zone {
                Some(zone) => state.fridge().in_zone(zone),
                None => state.fridge().items().iter().collect(),
            };
            if items.is_empty() {
                println!("仓库为空");
                return Ok(());
            }
            println!("当前存量: {}件\n", items.len());
            for item in items {
                let marker = if item.is_critical(now) {
                    "  ⚠️ 新鲜度：临界"
                } else {
                    ""
                };
                println!(
                    "{:<36} {} {} ×{}{} [{}] {} 已存{}天{}",
                    item.id,
                    item.icon,
                    item.name,
                    item.quantity,
                    item.unit,
                    item.zone.label(),
                    item.status_at(now).label(),
                    item.elapsed_days(now),
                    marker
                );
            }
        }
        FridgeCommands::Show { id } => {
            let now = now_ms();
            let item = state
                .fridge()
                .get(&id)
                .ok_or_else(|| AppError::UnknownItem(id.clone()))?;
            println!("{} {}（{}）", item.icon, item.name, item.category);
            println!("存入时间: {}", format_storage_time(item.added_date));
            println!("已存时长: {} 天", item.elapsed_days(now));
            println!("当前状态: {}", item.status_at(now).label());
            println!("库存量: {}{}", item.quantity, item.unit);
            println!("储存分区: {}", item.zone.label());
            println!(
                "诊断结论: {}",
                item.storage_advice.as_deref().unwrap_or("暂无诊断信息")
            );
            if let Some(tips) = &item.cooking_tips {
                println!("食材特征: {tips}");
            }
        }
        FridgeCommands::Add {
            name,
            category,
            zone,
            quantity,
            unit,
            days,
        } => {
            let entry = catalog::entries().iter().find(|e| e.name == name);
            let category = category
                .or_else(|| entry.map(|e| e.category.label().to_string()))
                .unwrap_or_else(|| "其他".to_string());
            let icon = entry
                .map(|e| e.icon)
                .unwrap_or_else(|| icon_for_category(&category));
            let days = days
                .or_else(|| entry.map(|e| parse_shelf_life_days(e.storage_life)))
                .unwrap_or(DEFAULT_SHELF_LIFE_DAYS);
            let zone = zone.unwrap_or(StorageZone::Fridge);

            let item = state
                .add_manual(&name, &category, icon, zone, quantity, &unit, days)
                .await?;
            println!(
                "已存入库存: {} {} ×{}{} [{}] 预计保存 {} 天 (id: {})",
                item.icon,
                item.name,
                item.quantity,
                item.unit,
                item.zone.label(),
                item.remaining_days,
                item.id
            );
        }
        FridgeCommands::Use { id, count } => match state.adjust_quantity(&id, -count).await? {
            QuantityChange::Updated(quantity) => println!("已消耗 {count}，剩余 {quantity}"),
            QuantityChange::Removed => println!("库存归零，已自动移除该食材"),
        },
        FridgeCommands::Restock { id, count } => match state.adjust_quantity(&id, count).await? {
            QuantityChange::Updated(quantity) => println!("已补充 {count}，现有 {quantity}"),
            QuantityChange::Removed => println!("库存归零，已自动移除该食材"),
        },
        FridgeCommands::Remove { id } => {
            state.remove_item(&id).await?;
            println!("已移除纪录");
        }
    }
    Ok(())
}

async fn handle_history(state: &mut AppState, command: HistoryCommands) -> Result<()> {
    match command {
        HistoryCommands::List => {
            if state.history().is_empty() {
                println!("暂无识别记录");
                return Ok(());
            }
            for item in state.history().items() {
                println!(
                    "{:<36} {} {} {} 预计剩 {} 天",
                    item.id,
                    format_history_time(item.record.timestamp),
                    item.record.freshness.label(),
                    item.record.ingredient_name,
                    item.record.remaining_days,
                );
            }
        }
        HistoryCommands::Show { id } => {
            let item = state
                .history()
                .find(&id)
                .ok_or_else(|| AppError::UnknownItem(id.clone()))?;
            print_assessment(item);
            if let Some(image) = &item.image_url {
                println!("图片: {image}");
            }
        }
        HistoryCommands::Report { id } => {
            state.report_error(&id).await?;
            println!("您的反馈已记录，感谢协助优化AI模型！");
        }
        HistoryCommands::Clear => {
            state.clear_history().await?;
            println!("已清空所有记录");
        }
    }
    Ok(())
}

fn handle_catalog(command: CatalogCommands) -> Result<()> {
    match command {
        CatalogCommands::Search { query, category } => {
            let query = query.unwrap_or_default();
            let hits = catalog::lookup(&query, category);
            if hits.is_empty() {
                println!("图鉴中没有匹配的食材");
                return Ok(());
            }
            for entry in hits {
                println!(
                    "{:<16} {} {}（{}）",
                    entry.id,
                    entry.icon,
                    entry.name,
                    entry.category.label()
                );
            }
        }
        CatalogCommands::Show { id } => {
            let entry = catalog::get(&id)
                .with_context(|| format!("no catalog entry with id {id}"))?;
            print_catalog_entry(entry);
        }
    }
    Ok(())
}

fn handle_home(state: &AppState) -> Result<()> {
    let now = now_ms();
    println!("FreshCheck — 专业新鲜度判别工具");
    if state.location().region != Region::Unknown {
        println!("📍 {}气候", state.location().region.label());
    }
    println!("当前存量: {}件", state.fridge().len());

    println!("\n── 临期状态 ──");
    let expiring = state.fridge().near_expiry(now);
    if expiring.is_empty() {
        println!("库存食材状态良好");
    } else {
        for item in expiring.iter().take(3) {
            println!("{} {}  新鲜度下降", item.icon, item.name);
        }
    }

    println!("\n── 处理参考方案 ──");
    match recipes::suggest(state.fridge(), now) {
        Some(suggestion) => {
            println!("{}", suggestion.title);
            println!("{}", suggestion.description);
            match recipes::recipe_detail(&suggestion.title) {
                Some(detail) => {
                    println!("\n参考清单: {}", detail.ingredients.join("、"));
                    println!("流程参考:");
                    for (idx, step) in detail.steps.iter().enumerate() {
                        println!("  {}. {step}", idx + 1);
                    }
                }
                None => println!("💡 状态提示：请结合图鉴对照指南观察食材的新鲜度变化。"),
            }
        }
        None => println!("目前无特定食材参考建议。"),
    }
    Ok(())
}

async fn handle_consent(state: &mut AppState, accept: bool) -> Result<()> {
    print_disclaimer();
    if accept {
        state.accept_terms().await?;
        println!("\n已记录同意，所有功能已开放。");
    } else if state.consent() {
        println!("\n已处于同意状态。");
    } else {
        println!("\n尚未记录同意状态。追加 --accept 表示同意并开始使用。");
    }
    Ok(())
}

fn print_disclaimer() {
    println!("⚠️ 重要提示");
    println!("本AI识别结果基于图像分析，仅供参考，不能替代您的最终判断。");
    println!("对于因依赖本结果而造成的任何损失，本软件不承担责任。");
    println!("请务必结合食品的气味、质地及保质期等信息审慎决策。");
}

fn print_assessment(item: &HistoryItem) {
    let record = &item.record;
    println!("\n【{}】{} {}", record.category, record.ingredient_name, record.icon);
    println!("新鲜度: {}", record.freshness.label());
    println!("状态保持: {} 天", record.remaining_days);
    println!("客观诊断报告: {}", record.reasoning);
    println!("食材特征: {}", record.cooking_tips);
    println!("记录 id: {}", item.id);
}

fn print_catalog_entry(entry: &IngredientEntry) {
    println!("{} {}（{}）", entry.icon, entry.name, entry.category.label());
    println!("\n💡 状态判断特征");
    for tip in entry.selection_tips {
        println!("  - {tip}");
    }
    println!("\n⚠️ 变质特征");
    for sign in entry.spoilage_signs {
        println!("  - {sign}");
    }
    println!("\n🔍 新鲜度诊断对照表");
    for diagnostic in entry.diagnostics() {
        println!("[{}] {}", diagnostic.tier.label(), tier_advice(entry, diagnostic.tier));
        println!("  眼看: {}", diagnostic.visual);
        println!("  手摸: {}", diagnostic.feel);
    }
    println!("\n🏠 建议储存环境: {}", entry.storage_advice);
    println!("典型新鲜周期: {} 天", entry.storage_life);
}

/// Per-tier status line for the catalog detail, deriving the storage method
/// from the advice text the way the original detail view did.
fn tier_advice(entry: &IngredientEntry, tier: DiagnosticTier) -> String {
    let method = if entry.storage_advice.contains("冷藏") {
        "冷藏"
    } else if entry.storage_advice.contains("冷冻") {
        "冷冻"
    } else if entry.storage_advice.contains("常温") {
        "常温"
    } else {
        "保存"
    };
    match tier {
        DiagnosticTier::VeryFresh => {
            format!("当前处于最佳保鲜期 (预计可{method} {} 天)", entry.storage_life)
        }
        DiagnosticTier::Average => "新鲜度已进入中期阶段".to_string(),
        DiagnosticTier::Spoiled => "已失去保鲜价值，状态异常".to_string(),
    }
}

/// Icon stand-in when the service returned none, keyed off the category text.
fn icon_for_category(category: &str) -> &'static str {
    if category.contains('肉') {
        "🥩"
    } else if category.contains('果') {
        "🍎"
    } else {
        "🥬"
    }
}

/// `2025年8月25日14点`, matching the original storage-time display.
fn format_storage_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => format!("{}年{}月{}日{}点", dt.year(), dt.month(), dt.day(), dt.hour()),
        None => format!("{timestamp_ms}ms"),
    }
}

fn format_history_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{timestamp_ms}ms"),
    }
}
