//! H.264/AVC Annex B 码流扫描.
//!
//! 在任意字节缓冲区的 `(offset, length)` 窗口内:
//! - 检测 3/4 字节起始码
//! - 枚举 NAL 单元的类型与字节范围
//! - 按类型查找第一个匹配的 NAL 单元
//! - 快速判断窗口是否以起始码开头
//!
//! 不移除防竞争字节, 也不解析 SPS/PPS/切片内容.

pub mod nal_type;
pub mod scan;
pub mod start_code;
pub mod unit;
pub mod validity;

pub use nal_type::NalUnitType;
pub use scan::{
    AnnexBUnits, H264Scanner, ScanOutcome, SearchOutcome, count_units, enumerate,
    enumerate_into, find_unit_by_type,
};
pub use start_code::{StartCode, StartCodeMatch, find_start_code, prefix_at};
pub use unit::NalUnit;
pub use validity::{is_valid_nal_unit, nal_unit_type_at};
