//! 调度事件
//!
//! 定义调度事件结构及其优先级比较。

use super::process::ProcessId;
use super::time::SimTime;
use std::cmp::Ordering;

/// 同一时刻内的优先级：`Urgent`（进程首次启动）排在 `Normal` 之前。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Urgent,
    Normal,
}

/// 调度事件：在 `at` 时刻恢复进程 `pid`，`seq` 为插入序号。
///
/// 排序键为 `(at, priority, seq)`。
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) priority: Priority,
    pub(crate) seq: u64,
    pub(crate) pid: ProcessId,
}

impl ScheduledEvent {
    pub fn at(&self) -> SimTime {
        self.at
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn pid(&self) -> ProcessId {
        self.pid
    }
}

// BinaryHeap 是 max-heap；我们需要最小时间优先，因此反向比较。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at
            .cmp(&other.at)
            .then(self.priority.cmp(&other.priority))
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}
