//! 仿真错误
//!
//! 这些错误都表示调用方的编程错误：一旦出现，本次仿真立即终止。

use super::process::ProcessId;
use super::resource::ResourceId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimError {
    /// 调度延迟为负或不是有限数（会破坏时钟单调性）。
    #[error("invalid schedule delay {0}: must be finite and >= 0")]
    InvalidDelay(f64),

    /// 进程请求的定时挂起时长不合法。
    #[error("process {pid} requested invalid timeout {duration}: must be finite and > 0")]
    InvalidDuration { pid: ProcessId, duration: f64 },

    #[error("invalid horizon {0}: must be finite and >= 0")]
    InvalidHorizon(f64),

    #[error("invalid parameter `{name}` = {value}: must be finite and > 0")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("resource capacity must be at least 1")]
    ZeroCapacity,

    /// 释放了一个并未持有的资源。
    #[error("process {pid} released resource {rid} without holding it")]
    NotHolder { pid: ProcessId, rid: ResourceId },

    #[error("unknown resource {0}")]
    UnknownResource(ResourceId),
}
