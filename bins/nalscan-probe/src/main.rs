//! nalscan-probe - H.264 Annex B NAL 单元探测工具
//!
//! 读取原始 Annex B 码流文件, 列出指定窗口内的 NAL 单元,
//! 或查找第一个指定类型的单元.

mod logging;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use nalscan_codec::H264Scanner;
use nalscan_core::{DEFAULT_TIME_BUDGET, ScanConfig, checked_window};

/// H.264 Annex B NAL 单元探测工具
#[derive(Parser, Debug)]
#[command(name = "nalscan-probe", version, about = "H.264 Annex B NAL 单元探测工具")]
struct Cli {
    /// 输入文件路径 (原始 Annex B 码流)
    input: PathBuf,

    /// 扫描窗口起始偏移
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// 扫描窗口长度 (默认到文件末尾)
    #[arg(long)]
    length: Option<usize>,

    /// 只查找第一个该类型的 NAL 单元 (类型编号 0-31)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..32))]
    find: Option<u8>,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 单次扫描的时间预算 (毫秒)
    #[arg(long, default_value_t = DEFAULT_TIME_BUDGET.as_millis() as u64)]
    budget_ms: u64,

    /// 日志详细程度 (-v/-vv/-vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("错误: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = load_input(&cli.input)?;
    let length = cli
        .length
        .unwrap_or_else(|| data.len().saturating_sub(cli.offset));
    let window = checked_window(data.len(), cli.offset, length).context("扫描窗口无效")?;
    info!(
        "输入文件: {}, {} 字节, 窗口 {:?}",
        cli.input.display(),
        data.len(),
        window
    );

    let config = ScanConfig::new().with_time_budget(Duration::from_millis(cli.budget_ms));
    let scanner = H264Scanner::new(config);
    let report = report::build_report(&scanner, &data, window, cli.find);
    if report.is_degraded() {
        warn!("扫描超出 {} ms 时间预算, 结果不完整", cli.budget_ms);
    }

    let text = if cli.json {
        serde_json::to_string_pretty(&report).context("序列化 JSON 失败")?
    } else {
        report.to_table()
    };
    println!("{}", text.trim_end());
    Ok(())
}

/// 读取整个输入文件
fn load_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("读取输入文件失败: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from([
            "nalscan-probe",
            "in.h264",
            "--offset",
            "4",
            "--find",
            "5",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.h264"));
        assert_eq!(cli.offset, 4);
        assert_eq!(cli.length, None);
        assert_eq!(cli.find, Some(5));
        assert!(cli.json);
        assert_eq!(cli.budget_ms, 100);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_reject_type_out_of_range() {
        assert!(Cli::try_parse_from(["nalscan-probe", "in.h264", "--find", "32"]).is_err());
    }

    #[test]
    fn test_load_input_and_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0x00, 0x00, 0x01, 0x09, 0xF0, 0x00, 0x00, 0x01, 0x41, 0x9A])
            .unwrap();

        let data = load_input(file.path()).unwrap();
        assert_eq!(data.len(), 11);

        let args: Vec<OsString> = vec![
            "nalscan-probe".into(),
            file.path().into(),
            "--json".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_reject_window_overrun() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0x00, 0x01, 0x09, 0xF0]).unwrap();

        let args: Vec<OsString> = vec![
            "nalscan-probe".into(),
            file.path().into(),
            "--length".into(),
            "64".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run(&cli).expect_err("越界窗口应报错");
        assert!(format!("{err:#}").contains("扫描窗口无效"));
    }

    #[test]
    fn test_输入文件不存在() {
        let err = load_input(Path::new("/nonexistent/nalscan/input.h264")).unwrap_err();
        assert!(format!("{err:#}").contains("读取输入文件失败"));
    }
}
