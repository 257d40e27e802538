//! H.265/HEVC NAL 类型分类.
//!
//! 仅提供类型表, 扫描器不使用. HEVC 的 Annex B 起始码与 H.264 相同,
//! 但 NAL 头部为 2 字节, 类型位于首字节的第 1-6 位.

pub mod nal_type;

pub use nal_type::HevcNalUnitType;
