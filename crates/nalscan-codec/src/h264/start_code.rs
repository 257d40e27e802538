//! Annex B 起始码检测与查找.
//!
//! - 3 字节起始码: `00 00 01`
//! - 4 字节起始码: `00 00 00 01`
//!
//! 同一位置优先匹配 4 字节起始码. 检测要求当前位置至少剩余 4 字节,
//! 即使只匹配 3 字节起始码, 也保证其后至少还有 1 字节 NAL 头.

use nalscan_core::clamp_window;

const START_CODE_4: [u8; 4] = [0x00, 0x00, 0x00, 0x01];
const START_CODE_3: [u8; 3] = [0x00, 0x00, 0x01];

/// 检测一个起始码所需的最少剩余字节数
pub const MIN_PREFIX_WINDOW: usize = 4;

/// 起始码宽度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartCode {
    /// `00 00 01`
    ThreeByte,
    /// `00 00 00 01`
    FourByte,
}

impl StartCode {
    /// 起始码字节数
    pub fn width(&self) -> usize {
        match self {
            Self::ThreeByte => 3,
            Self::FourByte => 4,
        }
    }

    /// 起始码字节序列
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            Self::ThreeByte => &START_CODE_3,
            Self::FourByte => &START_CODE_4,
        }
    }
}

/// 一次查找命中的起始码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartCodeMatch {
    /// 起始码首字节在缓冲区中的绝对位置
    pub position: usize,
    /// 起始码宽度
    pub prefix: StartCode,
}

impl StartCodeMatch {
    /// NAL 头部字节的位置 (紧跟起始码)
    pub fn header_position(&self) -> usize {
        self.position + self.prefix.width()
    }
}

/// 判断 `offset` 处是否以起始码开头
///
/// `remaining` 为调用方窗口内从 `offset` 起的剩余字节数.
/// 剩余不足 4 字节 (按 `remaining` 或缓冲区实际长度) 时返回 `None`.
pub fn prefix_at(data: &[u8], offset: usize, remaining: usize) -> Option<StartCode> {
    if remaining < MIN_PREFIX_WINDOW {
        return None;
    }
    let end = offset.checked_add(MIN_PREFIX_WINDOW)?;
    let bytes = data.get(offset..end)?;

    if bytes == START_CODE_4 {
        Some(StartCode::FourByte)
    } else if bytes[..3] == START_CODE_3 {
        Some(StartCode::ThreeByte)
    } else {
        None
    }
}

/// 从 `offset` 起在 `length` 字节内线性查找下一个起始码
///
/// 从 `offset` 到缓冲区末尾不足 4 字节时直接返回 `None`, 与 `length` 无关.
/// 查找不会越过 `min(offset + length, data.len())`.
pub fn find_start_code(data: &[u8], offset: usize, length: usize) -> Option<StartCodeMatch> {
    if data.len().saturating_sub(offset) < MIN_PREFIX_WINDOW {
        return None;
    }

    let end = clamp_window(data.len(), offset, length).end;
    (offset..end).find_map(|pos| {
        prefix_at(data, pos, end - pos).map(|prefix| StartCodeMatch {
            position: pos,
            prefix,
        })
    })
}
