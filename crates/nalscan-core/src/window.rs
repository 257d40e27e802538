//! 扫描窗口 `(offset, length)` 的裁剪与校验.
//!
//! 扫描函数接收调用方给出的窗口; 窗口可能超出缓冲区 (上游长度字段损坏等).
//! - [`clamp_window`]: 宽松模式, 裁剪到缓冲区范围内, 永不越界读取
//! - [`checked_window`]: 严格模式, 越界即返回错误

use std::ops::Range;

use crate::error::{NalError, NalResult};

/// 将窗口裁剪到 `0..buffer_len` 内
///
/// `offset` 超出缓冲区时返回空区间 `buffer_len..buffer_len`.
pub fn clamp_window(buffer_len: usize, offset: usize, length: usize) -> Range<usize> {
    let start = offset.min(buffer_len);
    let end = offset.saturating_add(length).min(buffer_len);
    start..end
}

/// 校验窗口完全落在缓冲区内
pub fn checked_window(buffer_len: usize, offset: usize, length: usize) -> NalResult<Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= buffer_len => Ok(offset..end),
        _ => Err(NalError::WindowOutOfBounds {
            offset,
            length,
            buffer_len,
        }),
    }
}
