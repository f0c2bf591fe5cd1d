use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lr35902_registers::cpu::{Reg, RegisterFile, WReg};

fn bench_named_accessors(c: &mut Criterion) {
    let mut registers = RegisterFile::new();

    c.bench_function("set-hl", |b| {
        b.iter(|| registers.set_hl(black_box(0xABCDu16)))
    });

    c.bench_function("get-hl", |b| b.iter(|| black_box(registers.hl())));

    c.bench_function("inc-sp-wrapping", |b| {
        b.iter(|| {
            let sp = registers.sp();
            registers.set_sp(black_box(sp.wrapping_add(1)));
        })
    });
}

fn bench_routed_accessors(c: &mut Criterion) {
    let mut registers = RegisterFile::new();

    c.bench_function("set-by-name-b", |b| {
        b.iter(|| registers.set(black_box(Reg::B), black_box(0x1FFi32)))
    });

    c.bench_function("set-word-by-name-de", |b| {
        b.iter(|| registers.set_word(black_box(WReg::DE), black_box(-1i64)))
    });
}

criterion_group!(benches, bench_named_accessors, bench_routed_accessors);
criterion_main!(benches);
