//! 统计汇总
//!
//! 从 [`StatisticsLog`] 计算平均值；空序列的平均值记为 0。

use serde::Serialize;
use std::fmt;

use crate::carwash::StatisticsLog;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub cars_served: usize,
    pub samples: usize,
    pub avg_arrival_interval: f64,
    pub avg_queue_length: f64,
    pub avg_wait: f64,
    /// 0..=1
    pub utilization: f64,
}

fn mean(it: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = it.fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl Summary {
    pub fn from_log(log: &StatisticsLog) -> Self {
        Self {
            cars_served: log.waits().len(),
            samples: log.samples().len(),
            avg_arrival_interval: mean(log.arrival_intervals()),
            avg_queue_length: mean(log.queue_lengths().map(|q| q as f64)),
            avg_wait: mean(log.wait_times()),
            utilization: mean(log.utilization().map(f64::from)),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average arrival interval: {:.2} minutes.",
            self.avg_arrival_interval
        )?;
        writeln!(f, "Average queue length: {:.2} cars.", self.avg_queue_length)?;
        writeln!(f, "Average wait time: {:.2} minutes.", self.avg_wait)?;
        write!(
            f,
            "Car wash utilization rate: {:.2}%.",
            self.utilization * 100.0
        )
    }
}
