//! H.264 NAL 单元类型表.
//!
//! 覆盖 ISO/IEC 14496-10 Table 7-1 中常用类型, 以及 RFC 6184 (原 RFC 3984)
//! 在 RTP 负载中使用的聚合/分片类型 (24-29).
//!
//! # NAL 头部 (1 字节)
//! ```text
//! ┌─────────────────────────────────────┐
//! │ forbidden(1) | ref_idc(2) | type(5) │
//! └─────────────────────────────────────┘
//! ```

/// NAL 单元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NalUnitType {
    /// 非 IDR 图像切片 (P/B slice)
    Slice,
    /// 数据分区 A (DPA)
    SliceDpa,
    /// 数据分区 B (DPB)
    SliceDpb,
    /// 数据分区 C (DPC)
    SliceDpc,
    /// IDR 图像切片 (关键帧)
    SliceIdr,
    /// 增补增强信息 (SEI)
    Sei,
    /// 序列参数集 (SPS)
    Sps,
    /// 图像参数集 (PPS)
    Pps,
    /// 访问单元分隔符 (AUD)
    Aud,
    /// 序列结束
    EndOfSequence,
    /// 流结束
    EndOfStream,
    /// 填充数据
    FillerData,
    /// SPS 扩展
    SpsExtension,
    /// 辅助图像切片
    AuxiliarySlice,
    /// STAP-A 单时间聚合包 (RFC 6184 5.7.1)
    StapA,
    /// STAP-B
    StapB,
    /// MTAP16 多时间聚合包 (RFC 6184 5.7.2)
    Mtap16,
    /// MTAP24
    Mtap24,
    /// FU-A 分片单元 (RFC 6184 5.8)
    FuA,
    /// FU-B
    FuB,
    /// 未知或保留类型, 保留原始编号
    Unknown(u8),
}

impl NalUnitType {
    /// 从 NAL 类型编号创建 (只取低 5 位)
    pub fn from_type_id(type_id: u8) -> Self {
        let type_id = type_id & 0x1F;
        match type_id {
            1 => Self::Slice,
            2 => Self::SliceDpa,
            3 => Self::SliceDpb,
            4 => Self::SliceDpc,
            5 => Self::SliceIdr,
            6 => Self::Sei,
            7 => Self::Sps,
            8 => Self::Pps,
            9 => Self::Aud,
            10 => Self::EndOfSequence,
            11 => Self::EndOfStream,
            12 => Self::FillerData,
            13 => Self::SpsExtension,
            19 => Self::AuxiliarySlice,
            24 => Self::StapA,
            25 => Self::StapB,
            26 => Self::Mtap16,
            27 => Self::Mtap24,
            28 => Self::FuA,
            29 => Self::FuB,
            _ => Self::Unknown(type_id),
        }
    }

    /// 从 NAL 头部字节创建 (取低 5 位)
    pub fn from_header_byte(header: u8) -> Self {
        Self::from_type_id(header & 0x1F)
    }

    /// 获取类型编号, 总在 0-31 之内
    pub fn type_id(&self) -> u8 {
        match self {
            Self::Slice => 1,
            Self::SliceDpa => 2,
            Self::SliceDpb => 3,
            Self::SliceDpc => 4,
            Self::SliceIdr => 5,
            Self::Sei => 6,
            Self::Sps => 7,
            Self::Pps => 8,
            Self::Aud => 9,
            Self::EndOfSequence => 10,
            Self::EndOfStream => 11,
            Self::FillerData => 12,
            Self::SpsExtension => 13,
            Self::AuxiliarySlice => 19,
            Self::StapA => 24,
            Self::StapB => 25,
            Self::Mtap16 => 26,
            Self::Mtap24 => 27,
            Self::FuA => 28,
            Self::FuB => 29,
            Self::Unknown(id) => *id & 0x1F,
        }
    }

    /// 是否为 VCL (Video Coding Layer) NAL
    pub fn is_vcl(&self) -> bool {
        matches!(
            self,
            Self::Slice | Self::SliceDpa | Self::SliceDpb | Self::SliceDpc | Self::SliceIdr
        )
    }

    /// 是否为关键帧 (IDR)
    pub fn is_idr(&self) -> bool {
        matches!(self, Self::SliceIdr)
    }

    /// 是否为参数集 (SPS/PPS/SPS 扩展)
    pub fn is_parameter_set(&self) -> bool {
        matches!(self, Self::Sps | Self::Pps | Self::SpsExtension)
    }

    /// 是否为 RTP 聚合或分片类型, 不应出现在 Annex B 码流中
    pub fn is_rtp_aggregate(&self) -> bool {
        matches!(self.type_id(), 24..=29)
    }
}

impl From<u8> for NalUnitType {
    fn from(type_id: u8) -> Self {
        Self::from_type_id(type_id)
    }
}

impl std::fmt::Display for NalUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slice => write!(f, "Slice"),
            Self::SliceDpa => write!(f, "SliceDPA"),
            Self::SliceDpb => write!(f, "SliceDPB"),
            Self::SliceDpc => write!(f, "SliceDPC"),
            Self::SliceIdr => write!(f, "IDR"),
            Self::Sei => write!(f, "SEI"),
            Self::Sps => write!(f, "SPS"),
            Self::Pps => write!(f, "PPS"),
            Self::Aud => write!(f, "AUD"),
            Self::EndOfSequence => write!(f, "EndOfSeq"),
            Self::EndOfStream => write!(f, "EndOfStream"),
            Self::FillerData => write!(f, "Filler"),
            Self::SpsExtension => write!(f, "SPSExt"),
            Self::AuxiliarySlice => write!(f, "AuxSlice"),
            Self::StapA => write!(f, "STAP-A"),
            Self::StapB => write!(f, "STAP-B"),
            Self::Mtap16 => write!(f, "MTAP16"),
            Self::Mtap24 => write!(f, "MTAP24"),
            Self::FuA => write!(f, "FU-A"),
            Self::FuB => write!(f, "FU-B"),
            Self::Unknown(id) => write!(f, "Unknown({id})"),
        }
    }
}
