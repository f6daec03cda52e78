//! 进程抽象
//!
//! 进程是一个显式状态机：每次被事件恢复时执行到下一个挂起点，
//! 然后把挂起请求（[`Suspend`]）交还给 [`Environment`](super::Environment)。

use super::environment::Kernel;
use super::error::SimError;
use super::resource::{Resource, ResourceId};
use super::time::SimTime;
use std::fmt;

/// 进程标识符（进程表下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub usize);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// 进程生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// 已有一个当前或将来的恢复事件在队列中（包括刚 spawn、刚获得资源）
    Runnable,
    Suspended(SuspendReason),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    Timer,
    Resource(ResourceId),
}

/// 进程交还给调度器的挂起请求
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suspend {
    /// 暂停 `d` 个时间单位（要求有限且 > 0）
    Timeout(f64),
    /// 申请资源；即使立即获得，也要让出控制权并在同一时刻恢复
    Acquire(ResourceId),
    /// 结束；仍持有的资源会被自动释放
    Done,
}

/// 一段可挂起的顺序逻辑。`W` 是驱动方持有的世界（例如统计日志）。
pub trait Process<W> {
    fn resume(&mut self, cx: &mut Context<'_, W>) -> Result<Suspend, SimError>;
}

/// 进程在一次恢复期间可见的环境
pub struct Context<'a, W> {
    pub(crate) kernel: &'a mut Kernel<W>,
    pub(crate) world: &'a mut W,
    pub(crate) pid: ProcessId,
}

impl<W> Context<'_, W> {
    pub fn now(&self) -> SimTime {
        self.kernel.sim.now()
    }

    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    pub fn world(&self) -> &W {
        &*self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut *self.world
    }

    /// 创建新进程，在当前时刻首次运行（先于同一时刻已排队的普通事件）。
    pub fn spawn<P>(&mut self, name: impl Into<String>, body: P) -> ProcessId
    where
        P: Process<W> + 'static,
    {
        self.kernel.spawn(name.into(), Box::new(body))
    }

    /// 释放当前进程持有的资源，若有等待者则在同一时刻唤醒它。
    pub fn release(&mut self, rid: ResourceId) -> Result<(), SimError> {
        self.kernel.release(rid, self.pid)
    }

    pub fn resource(&self, rid: ResourceId) -> Result<&Resource, SimError> {
        self.kernel.resource(rid)
    }
}
