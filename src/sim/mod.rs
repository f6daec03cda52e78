//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件：仿真时间、调度事件、仿真器、
//! 进程抽象、容量受限资源以及驱动它们的环境。

// 子模块声明
mod environment;
mod error;
mod process;
mod resource;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use environment::{Environment, RunSummary};
pub use error::SimError;
pub use process::{Context, Process, ProcessId, ProcessState, Suspend, SuspendReason};
pub use resource::{Acquire, Resource, ResourceId};
pub use scheduled_event::{Priority, ScheduledEvent};
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
