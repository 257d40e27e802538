//! 统一错误类型定义.
//!
//! 扫描函数本身只返回哨兵值 (`None` / `false` / 0 个单元), 不会失败.
//! 本错误类型服务于需要严格语义的调用方: 窗口越界校验, 以及把看门狗降级
//! 升级为错误的场景.

use thiserror::Error;

/// nalscan 统一错误类型
#[derive(Debug, Error)]
pub enum NalError {
    /// 扫描窗口超出缓冲区范围
    #[error("扫描窗口越界: offset={offset}, length={length}, buffer_len={buffer_len}")]
    WindowOutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },

    /// 扫描超出时间预算, 仅得到部分结果
    #[error("扫描超出时间预算: 耗时 {elapsed_ms} ms, 预算 {budget_ms} ms")]
    TimeBudgetExceeded { elapsed_ms: u128, budget_ms: u128 },
}

/// nalscan 统一 Result 类型
pub type NalResult<T> = Result<T, NalError>;
