//! 到达生成器
//!
//! 从给定的到达间隔序列中逐个取值，等待该间隔后生成一辆 [`Car`]。
//! 一直运行到 horizon 截止，或间隔序列耗尽为止。

use tracing::{debug, trace};

use super::car::Car;
use super::stats::{ArrivalRecord, StatisticsLog};
use crate::sim::{Context, Process, ResourceId, SimError, Suspend};

pub struct ArrivalGenerator<I> {
    intervals: I,
    lane: ResourceId,
    wash_duration: f64,
    cars: u64,
    /// 正在等待已抽取的间隔
    pending_arrival: bool,
}

impl<I> ArrivalGenerator<I>
where
    I: Iterator<Item = f64>,
{
    pub fn new<T>(intervals: T, lane: ResourceId, wash_duration: f64) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            intervals: intervals.into_iter(),
            lane,
            wash_duration,
            cars: 0,
            pending_arrival: false,
        }
    }
}

impl<I> Process<StatisticsLog> for ArrivalGenerator<I>
where
    I: Iterator<Item = f64>,
{
    fn resume(&mut self, cx: &mut Context<'_, StatisticsLog>) -> Result<Suspend, SimError> {
        let now = cx.now();
        if self.pending_arrival {
            self.cars += 1;
            let car = Car::new(self.cars, self.lane, self.wash_duration);
            let name = car.name();
            let pid = cx.spawn(name, car);
            trace!(car = self.cars, %pid, "生成车辆");
            self.pending_arrival = false;
        }

        let Some(interval) = self.intervals.next() else {
            debug!(cars = self.cars, %now, "到达间隔序列耗尽");
            return Ok(Suspend::Done);
        };
        cx.world_mut().record_arrival(ArrivalRecord { at: now, interval });
        self.pending_arrival = true;
        Ok(Suspend::Timeout(interval))
    }
}
