//! 洗车场景驱动
//!
//! 创建容量为 1 的车道，依次放入到达生成器与采样器，运行到 horizon。
//! 平均值的计算交给 [`crate::report`]。

use tracing::info;

use super::arrivals::ArrivalGenerator;
use super::config::ScenarioConfig;
use super::sampler::Sampler;
use super::stats::StatisticsLog;
use crate::sim::{Environment, RunSummary, SimError, SimTime};

const LANE_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarWash {
    wash_duration: f64,
    sample_interval: f64,
    horizon: f64,
}

/// 一次运行的结果：统计日志与引擎计数
#[derive(Debug, Clone)]
pub struct Outcome {
    pub log: StatisticsLog,
    pub run: RunSummary,
}

fn positive(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

impl CarWash {
    pub fn new(wash_duration: f64, sample_interval: f64, horizon: f64) -> Result<Self, SimError> {
        Ok(Self {
            wash_duration: positive("wash_duration", wash_duration)?,
            sample_interval: positive("sample_interval", sample_interval)?,
            horizon: positive("horizon", horizon)?,
        })
    }

    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        Self::new(cfg.wash_duration, cfg.sample_interval, cfg.horizon)
    }

    /// 以给定的到达间隔序列运行场景。
    pub fn run<T>(&self, intervals: T) -> Result<Outcome, SimError>
    where
        T: IntoIterator<Item = f64>,
        T::IntoIter: 'static,
    {
        let mut env = Environment::new(StatisticsLog::default());
        let lane = env.add_resource(LANE_CAPACITY)?;

        env.spawn(
            "arrivals",
            ArrivalGenerator::new(intervals, lane, self.wash_duration),
        );
        env.spawn("sampler", Sampler::new(lane, self.sample_interval));

        let run = env.run_until(SimTime(self.horizon))?;
        let log = env.into_world();
        info!(
            cars_served = log.waits().len(),
            cars_done = log.departures().len(),
            events = run.events,
            "洗车仿真结束"
        );
        Ok(Outcome { log, run })
    }
}
