//! 洗车场景
//!
//! 单车道（容量 1）、无限等待队列、随机到达、固定清洗时长。
//! 进程：到达生成器、车辆、采样器；统计写入 [`StatisticsLog`]。

mod arrivals;
mod car;
mod config;
mod sampler;
mod scenario;
mod stats;

pub use arrivals::ArrivalGenerator;
pub use car::Car;
pub use config::{
    ConfigError, DEFAULT_HORIZON, DEFAULT_MAX_INTERVAL, DEFAULT_MIN_INTERVAL,
    DEFAULT_SAMPLE_INTERVAL, DEFAULT_WASH_DURATION, IntervalSource, ScenarioConfig,
};
pub use sampler::Sampler;
pub use scenario::{CarWash, Outcome};
pub use stats::{ArrivalRecord, DepartureRecord, SampleRecord, StatisticsLog, WaitRecord};
