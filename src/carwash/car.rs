//! 车辆进程
//!
//! 一辆车的完整流程：到达 → 申请车道 → 记录等待时间 → 清洗 → 释放车道。

use tracing::info;

use super::stats::{DepartureRecord, StatisticsLog, WaitRecord};
use crate::sim::{Context, Process, ResourceId, SimError, SimTime, Suspend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Arriving,
    Waiting,
    Washing,
}

#[derive(Debug)]
pub struct Car {
    number: u64,
    lane: ResourceId,
    wash_duration: f64,
    arrived_at: SimTime,
    phase: Phase,
}

impl Car {
    pub fn new(number: u64, lane: ResourceId, wash_duration: f64) -> Self {
        Self {
            number,
            lane,
            wash_duration,
            arrived_at: SimTime::ZERO,
            phase: Phase::Arriving,
        }
    }

    pub fn name(&self) -> String {
        format!("Car {}", self.number)
    }
}

impl Process<StatisticsLog> for Car {
    fn resume(&mut self, cx: &mut Context<'_, StatisticsLog>) -> Result<Suspend, SimError> {
        let now = cx.now();
        match self.phase {
            Phase::Arriving => {
                self.arrived_at = now;
                info!(car = self.number, "Car {} arrived at minute {now}.", self.number);
                self.phase = Phase::Waiting;
                Ok(Suspend::Acquire(self.lane))
            }
            Phase::Waiting => {
                // 只有拿到车道后才会在此恢复
                let wait = now.since(self.arrived_at);
                cx.world_mut().record_wait(WaitRecord {
                    at: now,
                    car: self.number,
                    arrived_at: self.arrived_at,
                    wait,
                });
                info!(
                    car = self.number,
                    "Car {} enters car wash lane at minute {now} (waited {wait:.2} minutes).",
                    self.number
                );
                self.phase = Phase::Washing;
                Ok(Suspend::Timeout(self.wash_duration))
            }
            Phase::Washing => {
                cx.release(self.lane)?;
                cx.world_mut().record_departure(DepartureRecord {
                    at: now,
                    car: self.number,
                });
                info!(car = self.number, "Car {} left the car wash lane at minute {now}.", self.number);
                Ok(Suspend::Done)
            }
        }
    }
}
