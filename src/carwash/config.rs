//! 场景配置
//!
//! 场景参数（可从 JSON 读取，缺省值取自参考场景）以及到达间隔来源：
//! 固定序列或按种子生成的均匀分布随机数。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::sim::SimError;

pub const DEFAULT_MIN_INTERVAL: f64 = 1.0;
pub const DEFAULT_MAX_INTERVAL: f64 = 5.0;
pub const DEFAULT_WASH_DURATION: f64 = 3.0;
pub const DEFAULT_HORIZON: f64 = 50.0;
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse scenario config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("arrival interval range [{min}, {max}] is invalid: need 0 < min <= max")]
    IntervalRange { min: f64, max: f64 },
    #[error("fixed interval #{index} is {value}: must be finite and > 0")]
    FixedInterval { index: usize, value: f64 },
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// 场景参数，时间单位为分钟。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub min_interval: f64,
    pub max_interval: f64,
    pub wash_duration: f64,
    pub horizon: f64,
    pub sample_interval: f64,
    /// 均匀分布随机源的种子
    pub seed: u64,
    /// 若给出，则用该固定序列代替随机源
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<f64>>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            wash_duration: DEFAULT_WASH_DURATION,
            horizon: DEFAULT_HORIZON,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            seed: 0,
            intervals: None,
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 构造到达间隔序列：优先使用固定序列，否则在 `[min_interval, max_interval]`
    /// 内按种子均匀抽样。
    pub fn interval_source(&self) -> Result<IntervalSource, ConfigError> {
        if let Some(fixed) = &self.intervals {
            if let Some((index, &value)) = fixed
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v <= 0.0)
            {
                return Err(ConfigError::FixedInterval { index, value });
            }
            return Ok(IntervalSource::Fixed(fixed.clone().into_iter()));
        }
        let (min, max) = (self.min_interval, self.max_interval);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::IntervalRange { min, max });
        }
        Ok(IntervalSource::Uniform {
            rng: StdRng::seed_from_u64(self.seed),
            min,
            max,
        })
    }
}

/// 提供给到达生成器的间隔序列
#[derive(Debug)]
pub enum IntervalSource {
    Fixed(std::vec::IntoIter<f64>),
    Uniform { rng: StdRng, min: f64, max: f64 },
}

impl Iterator for IntervalSource {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            IntervalSource::Fixed(it) => it.next(),
            IntervalSource::Uniform { rng, min, max } => Some(rng.random_range(*min..=*max)),
        }
    }
}
