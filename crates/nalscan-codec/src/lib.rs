//! # nalscan-codec
//!
//! H.264 Annex B 码流扫描器: 在上游 (如 RTP 解包) 交付的字节缓冲区中
//! 定位并分类 NAL 单元, 交给下游解码器.
//!
//! 所有扫描函数都是输入缓冲区的纯函数, 不保留跨调用状态, 可在多个线程中并发调用.
//! 单次调用的最坏耗时受看门狗限制 (默认 100 ms).
//!
//! ## 使用示例
//!
//! ```rust
//! use nalscan_codec::h264::{self, NalUnitType};
//!
//! let data = [
//!     0x00, 0x00, 0x00, 0x01, 0x67, 0x42, // SPS
//!     0x00, 0x00, 0x01, 0x68, 0xCE, // PPS
//!     0x00, 0x00, 0x01, 0x65, 0x88, // IDR
//! ];
//!
//! let (units, outcome) = h264::enumerate(&data, 0, data.len());
//! assert_eq!(outcome.count, 3);
//! assert_eq!(units[2].nal_type, NalUnitType::SliceIdr);
//!
//! let idr = h264::find_unit_by_type(&data, 0, data.len(), NalUnitType::SliceIdr);
//! assert_eq!(idr.position, Some(11));
//! ```

pub mod h264;
pub mod h265;

// 重导出常用类型
pub use h264::{H264Scanner, NalUnit, NalUnitType, ScanOutcome, SearchOutcome};
pub use h265::HevcNalUnitType;
pub use nalscan_core::{Completion, NalError, NalResult, ScanConfig};
