//! duckfish 命令列：求解、結果三元組與圖檔輸出

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use duckfish::{logging, report, ScenarioParameters, UpdatedAssumptions};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Duck and fish product-mix planner", long_about = None)]
struct Cli {
    /// 情境參數 JSON 檔（未提供的欄位使用預設值）
    #[arg(long, global = true)]
    scenario: Option<PathBuf>,

    /// 更新計劃的鴨子產量上限
    #[arg(long, global = true)]
    max_ducks: Option<Decimal>,

    /// 更新計劃的魚產量下限
    #[arg(long, global = true)]
    min_fish: Option<Decimal>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 輸出可行域邊界的六個端點座標
    Region,
    /// 求解並輸出完整計劃
    Solve {
        #[arg(long, value_enum, default_value_t = Policy::Baseline)]
        policy: Policy,
    },
    /// 輸出 [鴨子, 魚, 總利潤]
    Triple {
        #[arg(long, value_enum, default_value_t = Policy::Baseline)]
        policy: Policy,
    },
    /// 求解並繪製最大利潤圖
    Chart {
        #[arg(long, value_enum, default_value_t = Policy::Baseline)]
        policy: Policy,
        #[arg(long)]
        out: PathBuf,
    },
    /// 繪製歷史銷售圖
    Sales {
        #[arg(long, default_value = "data/historical_sales_data.csv")]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// 產出全部圖檔與兩組結果
    Report {
        #[arg(long, default_value = "data/historical_sales_data.csv")]
        sales: PathBuf,
        #[arg(long, default_value = "figures")]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Policy {
    Baseline,
    Updated,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let params = match &cli.scenario {
        Some(path) => ScenarioParameters::from_json_file(path)
            .with_context(|| format!("載入情境參數失敗: {}", path.display()))?,
        None => ScenarioParameters::default(),
    };

    let mut assumptions = UpdatedAssumptions::default();
    if let Some(max_ducks) = cli.max_ducks {
        assumptions.max_ducks = max_ducks;
    }
    if let Some(min_fish) = cli.min_fish {
        assumptions.min_fish = min_fish;
    }

    match cli.command {
        Command::Region => {
            let region = report::compute_feasible_region(&params)?;
            println!("{}", serde_json::to_string_pretty(&region.coordinates())?);
        }
        Command::Solve { policy } => {
            let result = solve(&params, assumptions, policy)?;
            for message in &result.messages {
                tracing::warn!("{}", message);
            }
            println!("{}", serde_json::to_string_pretty(&result.plan)?);
        }
        Command::Triple { policy } => {
            let triple = solve(&params, assumptions, policy)?.plan.triple()?;
            println!("{}", serde_json::to_string(&triple)?);
        }
        Command::Chart { policy, out } => {
            let result = match policy {
                Policy::Baseline => report::render_baseline_chart(&params, &out),
                Policy::Updated => report::render_updated_chart(&params, assumptions, &out),
            }
            .with_context(|| format!("繪製最大利潤圖失敗: {}", out.display()))?;
            println!("{}", serde_json::to_string(&result.plan.triple()?)?);
        }
        Command::Sales { input, out } => {
            let history = report::render_historical_sales_chart(&input, &out)
                .with_context(|| format!("繪製歷史銷售圖失敗: {}", input.display()))?;
            tracing::info!("歷史銷售 {} 期", history.len());
        }
        Command::Report { sales, out_dir } => {
            let summary = report::generate_report(&params, assumptions, &sales, &out_dir)
                .context("產出報表失敗")?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn solve(
    params: &ScenarioParameters,
    assumptions: UpdatedAssumptions,
    policy: Policy,
) -> duckfish::Result<duckfish::OptimizationResult> {
    match policy {
        Policy::Baseline => report::compute_baseline_optimum(params),
        Policy::Updated => report::compute_updated_optimum(params, assumptions),
    }
}

