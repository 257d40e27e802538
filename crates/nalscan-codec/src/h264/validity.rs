//! 不做完整扫描的快速检查.

use super::nal_type::NalUnitType;
use super::start_code::prefix_at;

/// 判断窗口是否疑似以起始码开头
///
/// 廉价启发式: 首字节须为 0, 其后最多 3 字节内第一个非 0 字节须恰为 1.
/// 不校验单元完整性, 也不确认第二个起始码.
/// `length <= 4` 或前 4 字节不在缓冲区内时返回 `false`.
pub fn is_valid_nal_unit(data: &[u8], offset: usize, length: usize) -> bool {
    if length <= 4 {
        return false;
    }
    let Some(head) = offset.checked_add(4).and_then(|end| data.get(offset..end)) else {
        return false;
    };
    if head[0] != 0x00 {
        return false;
    }
    head[1..]
        .iter()
        .find(|&&b| b != 0x00)
        .is_some_and(|&b| b == 0x01)
}

/// 读取 `offset` 处起始码之后的 NAL 单元类型
///
/// `offset` 须恰好指向起始码; `length <= 4` 或不以起始码开头时返回 `None`.
pub fn nal_unit_type_at(data: &[u8], offset: usize, length: usize) -> Option<NalUnitType> {
    if length <= 4 {
        return None;
    }
    let prefix = prefix_at(data, offset, length)?;
    let header = data.get(offset + prefix.width())?;
    Some(NalUnitType::from_header_byte(*header))
}
