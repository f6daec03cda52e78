//! 仿真时间类型
//!
//! 定义仿真时间（实数，单位由场景决定，例如分钟）及其全序比较。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 仿真时间。
///
/// 内部为 `f64`；所有进入时钟的增量都先经过有限性检查，因此不会出现 NaN，
/// 比较使用 `total_cmp` 得到全序。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// `self + delay`，调用方负责保证 `delay` 有限且非负。
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    /// 两个时刻之差（`self - earlier`）。
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
