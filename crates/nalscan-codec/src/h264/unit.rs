//! 扫描结果中的 NAL 单元记录.

use std::ops::Range;

use super::nal_type::NalUnitType;
use super::start_code::StartCode;

/// 缓冲区中一个 NAL 单元的位置与类型
///
/// 仅描述位置, 不持有数据. `offset` 相对于整个缓冲区 (而非扫描窗口),
/// 指向起始码首字节; `length` 覆盖起始码到下一个起始码之前的最后一个字节,
/// 若没有下一个起始码则延伸到窗口末尾.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NalUnit {
    /// NAL 单元类型
    pub nal_type: NalUnitType,
    /// 起始码宽度
    pub prefix: StartCode,
    /// 起始码在缓冲区中的位置
    pub offset: usize,
    /// 含起始码的总字节数
    pub length: usize,
}

impl NalUnit {
    /// 类型编号 (5 bit)
    pub fn type_id(&self) -> u8 {
        self.nal_type.type_id()
    }

    /// 单元末尾 (不含) 的位置
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// 单元在缓冲区中的区间
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// NAL 头部字节的位置
    pub fn header_offset(&self) -> usize {
        self.offset + self.prefix.width()
    }

    /// 含起始码的完整字节
    ///
    /// `data` 须为扫描时的同一缓冲区, 否则可能返回空切片.
    pub fn bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.range()).unwrap_or(&[])
    }

    /// 去掉起始码后的 NAL 数据 (含 NAL 头部字节, 未移除防竞争字节)
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.header_offset()..self.end()).unwrap_or(&[])
    }
}
