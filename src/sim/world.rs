//! 世界 trait
//!
//! 定义仿真世界接口。

use super::time::SimTime;

/// 仿真世界：由业务层实现（例如统计日志）。每处理完一个事件调用一次 `on_tick`。
pub trait World {
    fn on_tick(&mut self, _now: SimTime) {}
}
