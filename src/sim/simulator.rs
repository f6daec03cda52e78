//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间与事件队列。

use super::error::SimError;
use super::process::ProcessId;
use super::scheduled_event::{Priority, ScheduledEvent};
use super::time::SimTime;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。
///
/// 只负责"何时恢复哪个进程"；进程本身由 [`Environment`](super::Environment) 持有。
#[derive(Debug, Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中尚未执行的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 队首事件的时间（若有）
    pub fn peek_time(&self) -> Option<SimTime> {
        self.q.peek().map(|ev| ev.at)
    }

    /// 在 `now + delay` 时刻恢复 `pid`。
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn schedule_after(&mut self, delay: f64, pid: ProcessId) -> Result<(), SimError> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(SimError::InvalidDelay(delay));
        }
        self.push(self.now.after(delay), Priority::Normal, pid);
        Ok(())
    }

    /// 在当前时刻恢复 `pid`，排在同一时刻所有 `Normal` 事件之前
    /// （同为 `Urgent` 的按插入顺序）。用于进程首次启动。
    pub fn schedule_urgent(&mut self, pid: ProcessId) {
        self.push(self.now, Priority::Urgent, pid);
    }

    fn push(&mut self, at: SimTime, priority: Priority, pid: ProcessId) {
        let seq = self.next_seq;
        trace!(%at, ?priority, seq, %pid, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent {
            at,
            priority,
            seq,
            pid,
        });

        debug!(queue_size = self.q.len(), "事件已加入队列");
    }

    /// 弹出队首事件（要求其时间不晚于 `until`），并把时钟推进到该事件时间。
    pub(crate) fn pop_due(&mut self, until: SimTime) -> Option<ScheduledEvent> {
        if self.q.peek()?.at > until {
            return None;
        }
        let item = self.q.pop()?;
        debug_assert!(item.at >= self.now, "时钟不能倒退");
        self.now = item.at;
        Some(item)
    }
}
