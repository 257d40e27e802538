//! Annex B NAL 单元枚举与按类型查找.
//!
//! # 终止性
//!
//! 每一轮查找的起点都是上一个起始码之后的 NAL 头部字节, 因此起点严格递增,
//! 扫描在窗口长度内必然结束. 墙钟看门狗 ([`ScanConfig::time_budget`]) 额外
//! 限制单次调用的最坏耗时: 超时后返回已得到的部分结果, 并标记为
//! [`Completion::Degraded`]. 在较慢的机器上, 同样的输入可能得到降级结果,
//! 调用方需将其视为软失败而非崩溃.

use log::{Level, debug, log_enabled, trace, warn};
use nalscan_core::{Completion, NalResult, ScanConfig, Watchdog, clamp_window};

use super::nal_type::NalUnitType;
use super::start_code::{StartCodeMatch, find_start_code};
use super::unit::NalUnit;

/// 枚举结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// 找到的 NAL 单元数
    pub count: usize,
    /// 完成状态
    pub completion: Completion,
}

impl ScanOutcome {
    /// 是否因超时提前结束
    pub fn is_degraded(&self) -> bool {
        self.completion.is_degraded()
    }

    /// 降级视为错误, 否则返回单元数
    pub fn into_result(self) -> NalResult<usize> {
        self.completion.into_result().map(|()| self.count)
    }
}

/// 按类型查找结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// 命中单元的起始码位置, 未找到为 `None`
    pub position: Option<usize>,
    /// 完成状态
    pub completion: Completion,
}

impl SearchOutcome {
    /// 是否因超时提前结束
    pub fn is_degraded(&self) -> bool {
        self.completion.is_degraded()
    }

    /// 降级视为错误, 否则返回查找结果
    pub fn into_result(self) -> NalResult<Option<usize>> {
        self.completion.into_result().map(|()| self.position)
    }
}

/// 查找窗口内下一个可作为单元边界的起始码
///
/// NAL 头部字节必须落在窗口内, 否则该起始码不构成新单元.
fn find_boundary(data: &[u8], from: usize, end: usize) -> Option<StartCodeMatch> {
    find_start_code(data, from, end.saturating_sub(from)).filter(|m| m.header_position() < end)
}

/// 窗口内 NAL 单元的惰性迭代器
///
/// 不带看门狗, 仅依赖起点严格递增保证结束. 首个起始码之前的字节不属于任何单元.
#[derive(Debug, Clone)]
pub struct AnnexBUnits<'a> {
    data: &'a [u8],
    end: usize,
    next: Option<StartCodeMatch>,
}

impl<'a> AnnexBUnits<'a> {
    /// 在 `data[offset..offset + length]` 上创建迭代器, 窗口超出缓冲区时自动裁剪
    pub fn new(data: &'a [u8], offset: usize, length: usize) -> Self {
        let window = clamp_window(data.len(), offset, length);
        let next = find_boundary(data, window.start, window.end);
        if let Some(first) = next {
            if first.position > window.start {
                debug!(
                    "H.264: 首个起始码之前有 {} 字节无法归属, offset={}",
                    first.position - window.start,
                    window.start
                );
            }
        }
        Self {
            data,
            end: window.end,
            next,
        }
    }
}

impl Iterator for AnnexBUnits<'_> {
    type Item = NalUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let header = current.header_position();
        let nal_type = NalUnitType::from_header_byte(self.data[header]);

        let following = find_boundary(self.data, header, self.end);
        let unit_end = following.map_or(self.end, |m| m.position);
        debug_assert!(unit_end > current.position);
        self.next = following;

        Some(NalUnit {
            nal_type,
            prefix: current.prefix,
            offset: current.position,
            length: unit_end - current.position,
        })
    }
}

/// 带时间预算的 H.264 Annex B 扫描器
#[derive(Debug, Clone, Copy, Default)]
pub struct H264Scanner {
    config: ScanConfig,
}

impl H264Scanner {
    /// 使用给定配置创建
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 当前配置
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// 枚举窗口内所有 NAL 单元, 写入 `out` (先清空)
    ///
    /// 每产出一个单元检查一次看门狗; 超时后保留已找到的单元并返回降级结果.
    pub fn enumerate_into(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        out: &mut Vec<NalUnit>,
    ) -> ScanOutcome {
        out.clear();
        let watchdog = Watchdog::start(self.config.time_budget);
        let mut completion = Completion::Complete;

        for unit in AnnexBUnits::new(data, offset, length) {
            if log_enabled!(Level::Trace) {
                trace!(
                    "H.264: NAL {} ({}) - {} 字节, offset={}",
                    unit.nal_type,
                    unit.type_id(),
                    unit.length,
                    unit.offset
                );
            }
            out.push(unit);

            if let Some(degraded) = watchdog.check() {
                warn!(
                    "H.264: 无法在 {} ms 内完成 {} 字节的 NAL 扫描, 已找到 {} 个单元",
                    watchdog.budget().as_millis(),
                    length,
                    out.len()
                );
                completion = degraded;
                break;
            }
        }

        ScanOutcome {
            count: out.len(),
            completion,
        }
    }

    /// 枚举窗口内所有 NAL 单元
    pub fn enumerate(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> (Vec<NalUnit>, ScanOutcome) {
        let mut units = Vec::new();
        let outcome = self.enumerate_into(data, offset, length, &mut units);
        (units, outcome)
    }

    /// 统计窗口内 NAL 单元数
    pub fn count_units(&self, data: &[u8], offset: usize, length: usize) -> usize {
        self.enumerate(data, offset, length).1.count
    }

    /// 查找第一个类型为 `target` 的 NAL 单元, 返回其起始码位置
    ///
    /// 按 5 位类型编号比较, `Unknown(5)` 与 `SliceIdr` 等价.
    /// 不匹配的单元被跳过, 下一轮从其 NAL 头部字节继续查找.
    pub fn find_unit_by_type(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        target: NalUnitType,
    ) -> SearchOutcome {
        let watchdog = Watchdog::start(self.config.time_budget);
        let window = clamp_window(data.len(), offset, length);
        let target_id = target.type_id();
        let mut from = window.start;

        while let Some(found) = find_boundary(data, from, window.end) {
            let header = found.header_position();
            if data[header] & 0x1F == target_id {
                return SearchOutcome {
                    position: Some(found.position),
                    completion: Completion::Complete,
                };
            }

            debug_assert!(header > from, "查找起点必须严格递增");
            from = header;

            if let Some(degraded) = watchdog.check() {
                warn!(
                    "H.264: 无法在 {} ms 内完成 {} 字节的类型查找, target={}",
                    watchdog.budget().as_millis(),
                    length,
                    target
                );
                return SearchOutcome {
                    position: None,
                    completion: degraded,
                };
            }
        }

        SearchOutcome {
            position: None,
            completion: Completion::Complete,
        }
    }
}

/// 使用默认配置枚举 NAL 单元, 写入 `out` (先清空)
pub fn enumerate_into(
    data: &[u8],
    offset: usize,
    length: usize,
    out: &mut Vec<NalUnit>,
) -> ScanOutcome {
    H264Scanner::default().enumerate_into(data, offset, length, out)
}

/// 使用默认配置枚举 NAL 单元
pub fn enumerate(data: &[u8], offset: usize, length: usize) -> (Vec<NalUnit>, ScanOutcome) {
    H264Scanner::default().enumerate(data, offset, length)
}

/// 使用默认配置统计 NAL 单元数
pub fn count_units(data: &[u8], offset: usize, length: usize) -> usize {
    H264Scanner::default().count_units(data, offset, length)
}

/// 使用默认配置按类型查找 NAL 单元
pub fn find_unit_by_type(
    data: &[u8],
    offset: usize,
    length: usize,
    target: NalUnitType,
) -> SearchOutcome {
    H264Scanner::default().find_unit_by_type(data, offset, length, target)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::h264::start_code::StartCode;

    /// SPS (4 字节起始码) + PPS (3 字节) + IDR (3 字节)
    fn sps_pps_idr() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E]);
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x68, 0xCE, 0x38, 0x80]);
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x65, 0x88, 0x80, 0x40]);
        data
    }

    fn zero_budget() -> H264Scanner {
        H264Scanner::new(ScanConfig::new().with_time_budget(Duration::ZERO))
    }

    #[test]
    fn test_enumerate_sps_pps_idr() {
        let data = sps_pps_idr();
        let (units, outcome) = enumerate(&data, 0, data.len());

        assert_eq!(outcome.count, 3);
        assert_eq!(outcome.completion, Completion::Complete);
        let types: Vec<u8> = units.iter().map(|u| u.type_id()).collect();
        assert_eq!(types, vec![7, 8, 5]);

        assert_eq!(units[0].offset, 0);
        assert_eq!(units[0].length, 8);
        assert_eq!(units[0].prefix, StartCode::FourByte);
        assert_eq!(units[1].offset, 8);
        assert_eq!(units[1].length, 7);
        assert_eq!(units[1].prefix, StartCode::ThreeByte);
        assert_eq!(units[2].offset, 15);
        assert_eq!(units[2].end(), data.len());
    }

    #[test]
    fn test_enumerate_into_clears_output() {
        let data = sps_pps_idr();
        let mut out = vec![NalUnit {
            nal_type: NalUnitType::Aud,
            prefix: StartCode::ThreeByte,
            offset: 99,
            length: 1,
        }];
        let outcome = enumerate_into(&data, 0, 0, &mut out);
        assert_eq!(outcome.count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_enumerate_sub_window_offsets_are_absolute() {
        let mut data = vec![0xAB; 5];
        data.extend_from_slice(&sps_pps_idr());
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x41, 0x9A]);

        // 窗口不含最后一个 P 切片
        let (units, _) = enumerate(&data, 5, 22);
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].offset, 5);
        assert_eq!(units[2].end(), 27);
    }

    #[test]
    fn test_枚举_跳过前导字节() {
        let data = [0x12, 0x34, 0x00, 0x00, 0x01, 0x09, 0xF0];
        let (units, outcome) = enumerate(&data, 0, data.len());
        assert_eq!(outcome.count, 1);
        assert_eq!(units[0].nal_type, NalUnitType::Aud);
        assert_eq!(units[0].offset, 2);
        assert_eq!(units[0].length, 5);
    }

    #[test]
    fn test_enumerate_trailing_start_code_without_header() {
        // 末尾的 00 00 00 01 后没有头部字节, 归入前一个单元
        let data = [0x00, 0x00, 0x01, 0x06, 0x05, 0x00, 0x00, 0x00, 0x01];
        let (units, _) = enumerate(&data, 0, data.len());
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].nal_type, NalUnitType::Sei);
        assert_eq!(units[0].end(), data.len());
    }

    #[test]
    fn test_枚举_越界窗口裁剪() {
        let data = sps_pps_idr();
        let (units, outcome) = enumerate(&data, 0, usize::MAX);
        assert_eq!(outcome.count, 3);
        assert_eq!(units[2].end(), data.len());
        assert_eq!(count_units(&data, data.len() + 10, 4), 0);
    }

    #[test]
    fn test_enumerate_zero_budget_degrades_after_first_unit() {
        let data = sps_pps_idr();
        let (units, outcome) = zero_budget().enumerate(&data, 0, data.len());
        assert_eq!(units.len(), 1);
        assert_eq!(outcome.count, 1);
        assert!(outcome.is_degraded());
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn test_count_units() {
        let data = sps_pps_idr();
        assert_eq!(count_units(&data, 0, data.len()), 3);
        assert_eq!(count_units(&[0u8; 64], 0, 64), 0);
    }

    #[test]
    fn test_iterator_matches_enumerate() {
        let data = sps_pps_idr();
        let lazy: Vec<NalUnit> = AnnexBUnits::new(&data, 0, data.len()).collect();
        let (eager, _) = enumerate(&data, 0, data.len());
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_find_unit_by_type_first_match() {
        let data = sps_pps_idr();
        let found = find_unit_by_type(&data, 0, data.len(), NalUnitType::Pps);
        assert_eq!(found.position, Some(8));
        assert!(!found.is_degraded());

        let missing = find_unit_by_type(&data, 0, data.len(), NalUnitType::Sei);
        assert_eq!(missing.position, None);
        assert_eq!(missing.completion, Completion::Complete);
    }

    #[test]
    fn test_按类型查找_比较类型编号() {
        let data = [
            0x00, 0x00, 0x00, 0x01, 0x67, 0xAA, 0x00, 0x00, 0x01, 0x65, 0xBB,
        ];
        let canonical = find_unit_by_type(&data, 0, data.len(), NalUnitType::SliceIdr);
        assert_eq!(canonical.position, Some(6));

        let raw = find_unit_by_type(&data, 0, data.len(), NalUnitType::Unknown(5));
        assert_eq!(raw.position, Some(6));
        let high_bits = find_unit_by_type(&data, 0, data.len(), NalUnitType::Unknown(0x27));
        assert_eq!(high_bits.position, Some(0));
    }

    #[test]
    fn test_find_unit_by_type_respects_offset() {
        let data = sps_pps_idr();
        let found = find_unit_by_type(&data, 1, data.len() - 1, NalUnitType::Sps);
        // 从 offset=1 起 `00 00 01 67` 仍构成 3 字节起始码
        assert_eq!(found.position, Some(1));

        let found = find_unit_by_type(&data, 8, data.len() - 8, NalUnitType::Sps);
        assert_eq!(found.position, None);
    }

    #[test]
    fn test_find_unit_by_type_zero_budget() {
        let data = sps_pps_idr();
        let scanner = zero_budget();

        // 第一个单元即命中, 不触发看门狗
        let hit = scanner.find_unit_by_type(&data, 0, data.len(), NalUnitType::Sps);
        assert_eq!(hit.position, Some(0));
        assert!(!hit.is_degraded());

        let miss = scanner.find_unit_by_type(&data, 0, data.len(), NalUnitType::SliceIdr);
        assert_eq!(miss.position, None);
        assert!(miss.is_degraded());
        assert!(miss.into_result().is_err());
    }
}
