//! 仿真环境
//!
//! 持有仿真器、进程表、资源表与世界，驱动事件循环：
//! 弹出最早的事件、恢复对应进程、登记它交还的挂起请求。

use super::error::SimError;
use super::process::{Context, Process, ProcessId, ProcessState, Suspend, SuspendReason};
use super::resource::{Acquire, Resource, ResourceId};
use super::simulator::Simulator;
use super::time::SimTime;
use super::world::World;
use tracing::{debug, info, trace};

struct Slot<W> {
    name: String,
    state: ProcessState,
    body: Option<Box<dyn Process<W>>>,
}

/// 不含世界的那部分环境；进程恢复期间通过 [`Context`] 访问。
pub(crate) struct Kernel<W> {
    pub(crate) sim: Simulator,
    procs: Vec<Slot<W>>,
    resources: Vec<Resource>,
}

impl<W> Kernel<W> {
    /// 新进程在当前时刻以 `Urgent` 优先级首次运行，先于同一时刻已排队的普通事件。
    pub(crate) fn spawn(&mut self, name: String, body: Box<dyn Process<W>>) -> ProcessId {
        let pid = ProcessId(self.procs.len());
        debug!(%pid, name = %name, now = %self.sim.now(), "创建进程");
        self.procs.push(Slot {
            name,
            state: ProcessState::Runnable,
            body: Some(body),
        });
        self.sim.schedule_urgent(pid);
        pid
    }

    pub(crate) fn resource(&self, rid: ResourceId) -> Result<&Resource, SimError> {
        self.resources
            .get(rid.0)
            .ok_or(SimError::UnknownResource(rid))
    }

    pub(crate) fn release(&mut self, rid: ResourceId, pid: ProcessId) -> Result<(), SimError> {
        let res = self
            .resources
            .get_mut(rid.0)
            .ok_or(SimError::UnknownResource(rid))?;
        if let Some(next) = res.release(rid, pid)? {
            debug!(%rid, from = %pid, to = %next, "资源移交");
            self.wake(next)?;
        }
        Ok(())
    }

    /// 在当前时刻恢复 `pid`（零延迟）。
    fn wake(&mut self, pid: ProcessId) -> Result<(), SimError> {
        self.set_state(pid, ProcessState::Runnable);
        self.sim.schedule_after(0.0, pid)
    }

    fn set_state(&mut self, pid: ProcessId, state: ProcessState) {
        if let Some(slot) = self.procs.get_mut(pid.0) {
            slot.state = state;
        }
    }

    /// 登记挂起请求；返回进程是否仍存活。
    fn suspend(&mut self, pid: ProcessId, req: Suspend) -> Result<bool, SimError> {
        match req {
            Suspend::Timeout(duration) => {
                if !duration.is_finite() || duration <= 0.0 {
                    return Err(SimError::InvalidDuration { pid, duration });
                }
                self.sim.schedule_after(duration, pid)?;
                self.set_state(pid, ProcessState::Suspended(SuspendReason::Timer));
                Ok(true)
            }
            Suspend::Acquire(rid) => {
                let res = self
                    .resources
                    .get_mut(rid.0)
                    .ok_or(SimError::UnknownResource(rid))?;
                match res.acquire(pid) {
                    Acquire::Granted => {
                        trace!(%pid, %rid, "资源立即授予");
                        self.wake(pid)?;
                    }
                    Acquire::Enqueued => {
                        trace!(%pid, %rid, queue_len = res.queue_len(), "进入等待队列");
                        self.set_state(pid, ProcessState::Suspended(SuspendReason::Resource(rid)));
                    }
                }
                Ok(true)
            }
            Suspend::Done => Ok(false),
        }
    }

    /// 终止进程并释放它仍持有的全部资源。
    fn terminate(&mut self, pid: ProcessId) -> Result<(), SimError> {
        let held: Vec<ResourceId> = self
            .resources
            .iter()
            .enumerate()
            .filter(|(_, r)| r.holds(pid))
            .map(|(i, _)| ResourceId(i))
            .collect();
        for rid in held {
            debug!(%pid, %rid, "终止时自动释放资源");
            self.release(rid, pid)?;
        }
        if let Some(slot) = self.procs.get_mut(pid.0) {
            slot.state = ProcessState::Terminated;
            slot.body = None;
        }
        Ok(())
    }
}

/// 一次 `run_until` 的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// 本次处理的事件数
    pub events: u64,
    /// 最后处理的事件时间（不会被强制推进到 horizon）
    pub final_time: SimTime,
    /// horizon 之后仍留在队列中的事件数
    pub pending: usize,
}

/// 单线程协作式仿真环境
pub struct Environment<W> {
    kernel: Kernel<W>,
    world: W,
}

impl<W: World> Environment<W> {
    pub fn new(world: W) -> Self {
        Self {
            kernel: Kernel {
                sim: Simulator::default(),
                procs: Vec::new(),
                resources: Vec::new(),
            },
            world,
        }
    }

    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.kernel.sim.now()
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    pub fn add_resource(&mut self, capacity: usize) -> Result<ResourceId, SimError> {
        let rid = ResourceId(self.kernel.resources.len());
        self.kernel.resources.push(Resource::new(capacity)?);
        Ok(rid)
    }

    pub fn resource(&self, rid: ResourceId) -> Result<&Resource, SimError> {
        self.kernel.resource(rid)
    }

    /// 创建进程，在当前时刻首次运行。
    pub fn spawn<P>(&mut self, name: impl Into<String>, body: P) -> ProcessId
    where
        P: Process<W> + 'static,
    {
        self.kernel.spawn(name.into(), Box::new(body))
    }

    pub fn state(&self, pid: ProcessId) -> Option<ProcessState> {
        self.kernel.procs.get(pid.0).map(|s| s.state)
    }

    pub fn process_name(&self, pid: ProcessId) -> Option<&str> {
        self.kernel.procs.get(pid.0).map(|s| s.name.as_str())
    }

    pub fn process_count(&self) -> usize {
        self.kernel.procs.len()
    }

    /// 运行直到事件队列为空或下一个事件晚于 `until`（等于 `until` 的事件仍会执行）。
    ///
    /// 任何进程返回错误都会立即终止本次运行。
    #[tracing::instrument(skip(self, until), fields(until = %until))]
    pub fn run_until(&mut self, until: SimTime) -> Result<RunSummary, SimError> {
        if !until.0.is_finite() || until.0 < 0.0 {
            return Err(SimError::InvalidHorizon(until.0));
        }
        info!("▶️  开始运行仿真");
        debug!(now = %self.now(), queue_size = self.kernel.sim.pending(), "初始状态");

        let mut events = 0u64;
        while let Some(item) = self.kernel.sim.pop_due(until) {
            events += 1;
            trace!(
                event_num = events,
                now = %item.at,
                seq = item.seq,
                pid = %item.pid,
                remaining_queue = self.kernel.sim.pending(),
                "执行事件"
            );
            self.step(item.pid)?;
            self.world.on_tick(item.at);
        }

        let summary = RunSummary {
            events,
            final_time: self.now(),
            pending: self.kernel.sim.pending(),
        };
        info!(
            total_events = summary.events,
            final_time = %summary.final_time,
            pending = summary.pending,
            "✅ 仿真完成"
        );
        Ok(summary)
    }

    fn step(&mut self, pid: ProcessId) -> Result<(), SimError> {
        let Some(slot) = self.kernel.procs.get_mut(pid.0) else {
            return Ok(());
        };
        let Some(mut body) = slot.body.take() else {
            trace!(%pid, "丢弃已终止进程的事件");
            return Ok(());
        };
        slot.state = ProcessState::Runnable;

        let outcome = {
            let mut cx = Context {
                kernel: &mut self.kernel,
                world: &mut self.world,
                pid,
            };
            body.resume(&mut cx)
        };

        match outcome.and_then(|req| self.kernel.suspend(pid, req)) {
            Ok(true) => {
                if let Some(slot) = self.kernel.procs.get_mut(pid.0) {
                    slot.body = Some(body);
                }
                Ok(())
            }
            Ok(false) => {
                trace!(%pid, "进程结束");
                self.kernel.terminate(pid)
            }
            Err(err) => {
                self.kernel.terminate(pid)?;
                Err(err)
            }
        }
    }
}
