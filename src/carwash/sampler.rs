//! 采样进程
//!
//! 每隔固定间隔记录一次等待队列长度与车道占用。

use super::stats::{SampleRecord, StatisticsLog};
use crate::sim::{Context, Process, ResourceId, SimError, Suspend};

#[derive(Debug)]
pub struct Sampler {
    lane: ResourceId,
    interval: f64,
}

impl Sampler {
    pub fn new(lane: ResourceId, interval: f64) -> Self {
        Self { lane, interval }
    }
}

impl Process<StatisticsLog> for Sampler {
    fn resume(&mut self, cx: &mut Context<'_, StatisticsLog>) -> Result<Suspend, SimError> {
        let lane = cx.resource(self.lane)?;
        let rec = SampleRecord {
            at: cx.now(),
            queue_length: lane.queue_len(),
            in_use: lane.in_use(),
            utilization: u8::from(lane.is_full()),
        };
        cx.world_mut().record_sample(rec);
        Ok(Suspend::Timeout(self.interval))
    }
}
