//! 墙钟看门狗.
//!
//! 为扫描循环提供时间上限: 预算耗尽后调用方停止扫描, 返回已得到的部分结果,
//! 并以 [`Completion::Degraded`] 标记本次结果不完整.

use std::time::{Duration, Instant};

use crate::error::{NalError, NalResult};

/// 扫描完成状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 正常扫描到窗口末尾
    Complete,
    /// 看门狗触发, 提前停止 (软失败)
    Degraded {
        /// 触发时已耗时
        elapsed: Duration,
        /// 时间预算
        budget: Duration,
    },
}

impl Completion {
    /// 是否为看门狗触发的降级结果
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// 将降级状态转为 [`NalError::TimeBudgetExceeded`]
    pub fn into_result(self) -> NalResult<()> {
        match self {
            Self::Complete => Ok(()),
            Self::Degraded { elapsed, budget } => Err(NalError::TimeBudgetExceeded {
                elapsed_ms: elapsed.as_millis(),
                budget_ms: budget.as_millis(),
            }),
        }
    }
}

/// 单次调用的看门狗
#[derive(Debug, Clone, Copy)]
pub struct Watchdog {
    started: Instant,
    budget: Duration,
}

impl Watchdog {
    /// 以给定预算开始计时
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// 时间预算
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// 已耗时
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// 预算已耗尽时返回降级状态
    ///
    /// 预算为 0 时首次检查即触发.
    pub fn check(&self) -> Option<Completion> {
        let elapsed = self.elapsed();
        if elapsed >= self.budget {
            Some(Completion::Degraded {
                elapsed,
                budget: self.budget,
            })
        } else {
            None
        }
    }
}
