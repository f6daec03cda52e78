//! 容量受限资源
//!
//! 按到达顺序（FIFO）授予资源；释放时唤醒等待队列的队首。

use super::error::SimError;
use super::process::ProcessId;
use std::collections::VecDeque;
use std::fmt;

/// 资源标识符（`Environment` 内资源表的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub usize);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// `acquire` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquire {
    Granted,
    Enqueued,
}

#[derive(Debug)]
pub struct Resource {
    capacity: usize,
    holders: Vec<ProcessId>,
    waiters: VecDeque<ProcessId>,
}

impl Resource {
    pub fn new(capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            holders: Vec::with_capacity(capacity),
            waiters: VecDeque::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_use(&self) -> usize {
        self.holders.len()
    }

    /// 等待队列长度（不含正在使用者）
    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    pub fn is_full(&self) -> bool {
        self.holders.len() == self.capacity
    }

    pub fn holds(&self, pid: ProcessId) -> bool {
        self.holders.contains(&pid)
    }

    /// 等待者，按入队顺序
    pub fn waiters(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.waiters.iter().copied()
    }

    pub(crate) fn acquire(&mut self, pid: ProcessId) -> Acquire {
        if self.holders.len() < self.capacity {
            self.holders.push(pid);
            Acquire::Granted
        } else {
            self.waiters.push_back(pid);
            Acquire::Enqueued
        }
    }

    /// 释放 `pid` 持有的一份容量；若有等待者，把容量直接移交给队首并返回它。
    pub(crate) fn release(
        &mut self,
        rid: ResourceId,
        pid: ProcessId,
    ) -> Result<Option<ProcessId>, SimError> {
        let idx = self
            .holders
            .iter()
            .position(|&h| h == pid)
            .ok_or(SimError::NotHolder { pid, rid })?;
        self.holders.swap_remove(idx);

        let next = self.waiters.pop_front();
        if let Some(next) = next {
            self.holders.push(next);
        }
        debug_assert!(self.holders.len() <= self.capacity);
        Ok(next)
    }
}
