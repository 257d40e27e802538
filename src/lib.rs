//! # nalscan
//!
//! H.264 Annex B 码流扫描器: 在任意字节缓冲区中定位起始码, 枚举并分类 NAL 单元.
//! 面向 RTP 解包等上游与解码器之间的衔接层, 对畸形或恶意输入有时间上限保护.
//!
//! # 快速开始
//!
//! ```rust
//! use nalscan::codec::h264::{self, NalUnitType};
//!
//! let data = [0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x00, 0x01, 0x68, 0xCE];
//! assert!(h264::is_valid_nal_unit(&data, 0, data.len()));
//!
//! let mut units = Vec::new();
//! let outcome = h264::enumerate_into(&data, 0, data.len(), &mut units);
//! assert_eq!(outcome.count, 2);
//! assert_eq!(units[1].nal_type, NalUnitType::Pps);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `nalscan-core` | 错误、配置、窗口校验、看门狗 |
//! | `nalscan-codec` | H.264 扫描与 H.264/H.265 类型表 |

/// 核心类型与工具
pub use nalscan_core as core;

/// 码流扫描与类型分类
pub use nalscan_codec as codec;

/// 获取 nalscan 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
