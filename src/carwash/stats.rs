//! 统计日志
//!
//! 仿真期间只由进程追加写入，仿真结束后只读。

use serde::{Deserialize, Serialize};

use crate::sim::{SimTime, World};

/// 到达间隔（在抽取时刻记录）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub at: SimTime,
    pub interval: f64,
}

/// 周期采样
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub at: SimTime,
    pub queue_length: usize,
    pub in_use: usize,
    /// 车道满载为 1，否则为 0
    pub utilization: u8,
}

/// 一辆车开始清洗时记录的等待时间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitRecord {
    /// 开始清洗的时刻
    pub at: SimTime,
    pub car: u64,
    pub arrived_at: SimTime,
    pub wait: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartureRecord {
    pub at: SimTime,
    pub car: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsLog {
    arrivals: Vec<ArrivalRecord>,
    samples: Vec<SampleRecord>,
    waits: Vec<WaitRecord>,
    departures: Vec<DepartureRecord>,
}

impl StatisticsLog {
    pub(crate) fn record_arrival(&mut self, rec: ArrivalRecord) {
        self.arrivals.push(rec);
    }

    pub(crate) fn record_sample(&mut self, rec: SampleRecord) {
        self.samples.push(rec);
    }

    pub(crate) fn record_wait(&mut self, rec: WaitRecord) {
        self.waits.push(rec);
    }

    pub(crate) fn record_departure(&mut self, rec: DepartureRecord) {
        self.departures.push(rec);
    }

    pub fn arrivals(&self) -> &[ArrivalRecord] {
        &self.arrivals
    }

    pub fn samples(&self) -> &[SampleRecord] {
        &self.samples
    }

    pub fn waits(&self) -> &[WaitRecord] {
        &self.waits
    }

    pub fn departures(&self) -> &[DepartureRecord] {
        &self.departures
    }

    pub fn arrival_intervals(&self) -> impl Iterator<Item = f64> + '_ {
        self.arrivals.iter().map(|r| r.interval)
    }

    pub fn queue_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.samples.iter().map(|r| r.queue_length)
    }

    pub fn utilization(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.iter().map(|r| r.utilization)
    }

    pub fn wait_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.waits.iter().map(|r| r.wait)
    }
}

impl World for StatisticsLog {}
