//! 洗车仿真
//!
//! 单车道洗车场：随机到达、固定清洗时长，输出平均统计并可导出统计日志 JSON。

use carwash_sim::carwash::{CarWash, ConfigError, ScenarioConfig};
use carwash_sim::report::Summary;
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "carwash", about = "Single-lane car wash discrete-event simulation")]
struct Args {
    /// Scenario JSON file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum inter-arrival time (minutes)
    #[arg(long)]
    min_interval: Option<f64>,

    /// Maximum inter-arrival time (minutes)
    #[arg(long)]
    max_interval: Option<f64>,

    /// Service (wash) duration (minutes)
    #[arg(long, alias = "wash")]
    service: Option<f64>,

    /// Sampling interval (minutes)
    #[arg(long)]
    sample_interval: Option<f64>,

    /// Simulation horizon (minutes)
    #[arg(long)]
    until: Option<f64>,

    /// Seed for the uniform arrival source
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed inter-arrival stream, e.g. `2,4,1`; replaces the random source
    #[arg(long, value_delimiter = ',')]
    intervals: Option<Vec<f64>>,

    /// Write the statistics log and summary as JSON
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

#[derive(Serialize)]
struct StatsExport<'a> {
    config: &'a ScenarioConfig,
    summary: Summary,
    log: &'a carwash_sim::carwash::StatisticsLog,
}

fn load_config(args: &Args) -> Result<ScenarioConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => ScenarioConfig::from_json_file(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(v) = args.min_interval {
        cfg.min_interval = v;
    }
    if let Some(v) = args.max_interval {
        cfg.max_interval = v;
    }
    if let Some(v) = args.service {
        cfg.wash_duration = v;
    }
    if let Some(v) = args.sample_interval {
        cfg.sample_interval = v;
    }
    if let Some(v) = args.until {
        cfg.horizon = v;
    }
    if let Some(v) = args.seed {
        cfg.seed = v;
    }
    if let Some(v) = &args.intervals {
        cfg.intervals = Some(v.clone());
    }
    Ok(cfg)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config(&args)?;
    let wash = CarWash::from_config(&cfg)?;
    let source = cfg.interval_source()?;

    let outcome = wash.run(source)?;
    let summary = Summary::from_log(&outcome.log);

    println!();
    println!("{summary}");

    if let Some(path) = args.stats_json {
        let export = StatsExport {
            config: &cfg,
            summary,
            log: &outcome.log,
        };
        let json = serde_json::to_string_pretty(&export)?;
        fs::write(&path, json)?;
        eprintln!("wrote stats to {}", path.display());
    }
    Ok(())
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
