// ==========================================
// 案件负载排程系统 - 命令行入口
// ==========================================

use anyhow::{Context, Result};
use caseload_scheduler::api::{ScheduleApi, ScheduleRequest};
use caseload_scheduler::config::ConfigManager;
use caseload_scheduler::domain::{OverflowPolicy, ValidationStatus};
use caseload_scheduler::{logging, APP_NAME, VERSION};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caseload-scheduler", about = "按比例分配案件并生成每日排程", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 输出 debug 日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON 格式日志
    #[arg(long, global = true)]
    json_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 执行排程
    Run {
        /// 案件表（需包含 Case Code / Billing Amount 列）
        #[arg(long)]
        cases: PathBuf,

        /// 经理表（需包含 Name / Max Load / Ratio 列）
        #[arg(long)]
        managers: PathBuf,

        /// 配置文件（JSON）
        #[arg(long, env = "CASELOAD_SCHEDULER_CONFIG")]
        config: Option<PathBuf>,

        /// 起始日期 YYYY-MM-DD（覆盖配置）
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// 节假日，可重复（覆盖配置）
        #[arg(long = "holiday")]
        holidays: Vec<NaiveDate>,

        /// 单个案件超过日上限时报错
        #[arg(long)]
        strict: bool,

        /// 导出目录（覆盖配置）
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// 打印默认配置
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json();
    } else {
        logging::init(cli.verbose);
    }
    tracing::info!("{} v{}", APP_NAME, VERSION);

    match cli.command {
        Commands::Run {
            cases,
            managers,
            config,
            start_date,
            holidays,
            strict,
            out,
        } => {
            let mut config = ConfigManager::load_or_default(config.as_deref())
                .context("加载配置失败")?;
            if start_date.is_some() {
                config.start_date = start_date;
            }
            if !holidays.is_empty() {
                config.holidays = holidays;
            }
            if strict {
                config.overflow_policy = OverflowPolicy::Strict;
            }
            if out.is_some() {
                config.output_dir = out;
            }

            let request = ScheduleRequest {
                cases_path: cases,
                managers_path: managers,
                config,
            };
            let response = ScheduleApi::new().run(&request).context("排程失败")?;
            let report = &response.report;

            let v = &report.validation;
            println!("全局校验 ({})", v.status);
            println!("  案件数: 输入 {} / 已排 {}", v.input_cases, v.scheduled_cases);
            println!("  总金额: 输入 {} / 已排 {}", v.input_value, v.scheduled_value);
            for s in &report.managers {
                println!(
                    "  {}: 目标 {} 实际 {} 偏差 {} 日上限 {} 利用率 {:.2}% 天数 {}",
                    s.manager,
                    s.target_load,
                    s.actual_load,
                    s.variance,
                    s.daily_limit,
                    s.utilization_pct,
                    s.days
                );
            }
            for path in &response.exported_files {
                println!("已导出: {}", path.display());
            }

            if v.status == ValidationStatus::Mismatch {
                anyhow::bail!("排程结果与输入不一致");
            }
        }
        Commands::DefaultConfig => {
            let config = caseload_scheduler::config::SchedulerConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
