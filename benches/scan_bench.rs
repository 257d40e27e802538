//! nalscan 性能基准测试.
//!
//! 覆盖单元枚举、按类型查找与全 0 输入的最坏情况.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalscan::codec::h264::{self, NalUnitType};

/// 构造包含 `count` 个 P 切片的码流, 末尾一个 IDR
fn make_stream(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * 68);
    for i in 0..count {
        if i % 2 == 0 {
            data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x41]);
        } else {
            data.extend_from_slice(&[0x00, 0x00, 0x01, 0x41]);
        }
        data.extend((0..60u8).map(|b| b | 0x80));
    }
    data.extend_from_slice(&[0x00, 0x00, 0x01, 0x65, 0x88, 0x80]);
    data
}

fn bench_enumerate(c: &mut Criterion) {
    let data = make_stream(1000);
    c.bench_function("h264_enumerate_1000_units", |b| {
        let mut out = Vec::with_capacity(1024);
        b.iter(|| {
            let outcome = h264::enumerate_into(black_box(&data), 0, data.len(), &mut out);
            black_box(outcome.count)
        });
    });
}

fn bench_find_by_type(c: &mut Criterion) {
    let data = make_stream(1000);
    c.bench_function("h264_find_idr_after_1000_units", |b| {
        b.iter(|| {
            h264::find_unit_by_type(black_box(&data), 0, data.len(), NalUnitType::SliceIdr)
                .position
        });
    });
}

fn bench_all_zero(c: &mut Criterion) {
    let data = vec![0u8; 256 * 1024];
    c.bench_function("h264_scan_all_zero_256k", |b| {
        b.iter(|| h264::count_units(black_box(&data), 0, data.len()));
    });
}

criterion_group!(benches, bench_enumerate, bench_find_by_type, bench_all_zero);
criterion_main!(benches);
