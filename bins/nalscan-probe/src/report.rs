//! 探测结果的构建与输出.

use std::fmt::Write as _;
use std::ops::Range;

use nalscan_codec::h264::{self, H264Scanner, NalUnitType};
use serde::Serialize;

/// 完整探测结果
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    file_size: usize,
    offset: usize,
    length: usize,
    /// 窗口是否疑似以起始码开头
    starts_with_start_code: bool,
    /// 是否因超时只得到部分结果
    degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<Vec<UnitInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<SearchInfo>,
}

/// 单个 NAL 单元
#[derive(Debug, Serialize)]
struct UnitInfo {
    index: usize,
    offset: usize,
    length: usize,
    start_code: usize,
    type_id: u8,
    type_name: String,
}

/// 按类型查找的结果
#[derive(Debug, Serialize)]
struct SearchInfo {
    type_id: u8,
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

/// 扫描 `data[window]` 并生成报告
///
/// `find` 为 `Some` 时只做按类型查找, 否则枚举全部单元.
pub fn build_report(
    scanner: &H264Scanner,
    data: &[u8],
    window: Range<usize>,
    find: Option<u8>,
) -> ProbeReport {
    let offset = window.start;
    let length = window.len();
    let mut report = ProbeReport {
        file_size: data.len(),
        offset,
        length,
        starts_with_start_code: h264::is_valid_nal_unit(data, offset, length),
        degraded: false,
        units: None,
        search: None,
    };

    match find {
        Some(type_id) => {
            let target = NalUnitType::from_type_id(type_id);
            let outcome = scanner.find_unit_by_type(data, offset, length, target);
            report.degraded = outcome.is_degraded();
            report.search = Some(SearchInfo {
                type_id,
                type_name: target.to_string(),
                position: outcome.position,
            });
        }
        None => {
            let (units, outcome) = scanner.enumerate(data, offset, length);
            report.degraded = outcome.is_degraded();
            report.units = Some(
                units
                    .iter()
                    .enumerate()
                    .map(|(index, unit)| UnitInfo {
                        index,
                        offset: unit.offset,
                        length: unit.length,
                        start_code: unit.prefix.width(),
                        type_id: unit.type_id(),
                        type_name: unit.nal_type.to_string(),
                    })
                    .collect(),
            );
        }
    }

    report
}

impl ProbeReport {
    /// 是否因超时只得到部分结果
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// 渲染为文本表格
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "窗口: offset={} length={} (文件 {} 字节), 起始码开头: {}",
            self.offset,
            self.length,
            self.file_size,
            if self.starts_with_start_code { "是" } else { "否" }
        );

        if let Some(units) = &self.units {
            let _ = writeln!(
                out,
                "{:>5}  {:>10}  {:>8}  {:>2}  {:>4}  类型",
                "#", "offset", "length", "sc", "id"
            );
            for u in units {
                let _ = writeln!(
                    out,
                    "{:>5}  {:>10}  {:>8}  {:>2}  {:>4}  {}",
                    u.index, u.offset, u.length, u.start_code, u.type_id, u.type_name
                );
            }
            let _ = writeln!(out, "共 {} 个 NAL 单元", units.len());
        }

        if let Some(search) = &self.search {
            match search.position {
                Some(pos) => {
                    let _ = writeln!(
                        out,
                        "类型 {} ({}) 首次出现于 offset={}",
                        search.type_name, search.type_id, pos
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "未找到类型 {} ({})",
                        search.type_name, search.type_id
                    );
                }
            }
        }

        if self.degraded {
            let _ = writeln!(out, "警告: 扫描超出时间预算, 结果不完整");
        }
        out
    }
}
