//! # nalscan-core
//!
//! nalscan 核心库, 提供错误类型、扫描配置、窗口校验与墙钟看门狗.
//!
//! 本 crate 不含任何码流知识, 由 `nalscan-codec` 中的扫描器使用.

pub mod config;
pub mod error;
pub mod watchdog;
pub mod window;

// 重导出常用类型
pub use config::{DEFAULT_TIME_BUDGET, ScanConfig};
pub use error::{NalError, NalResult};
pub use watchdog::{Completion, Watchdog};
pub use window::{checked_window, clamp_window};
