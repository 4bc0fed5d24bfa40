use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hw_fixed::{
  multiply, pack, unpack, ComplexFixed, ComplexMultiplier, Fixed, MultiplierConfig, PackingMethod,
  RounderConfig, RoundingMode, SignedRounder,
};

// Establish a baseline by comparing with a single native complex multiply

fn baseline_i64_mul(c: &mut Criterion) {
  c.bench_function("baseline_i64_mul", |b| {
    b.iter(|| {
      let (ar, ai, br, bi) = black_box((3_i64, 4_i64, 1_i64, -2_i64));
      (ar * br - ai * bi, ar * bi + ai * br)
    });
  });
}

// Time the reference models

fn operands(a_width: u32, b_width: u32) -> (ComplexFixed, ComplexFixed) {
  let a = ComplexFixed::from_ints(Fixed::min_value(a_width), Fixed::max_value(a_width), a_width, a_width).unwrap();
  let b = ComplexFixed::from_ints(Fixed::max_value(b_width), Fixed::min_value(b_width), b_width, b_width).unwrap();
  (a, b)
}

fn multiply_model(c: &mut Criterion) {
  let mut g = c.benchmark_group("multiply");
  for (a_width, b_width) in [(4, 4), (16, 18), (27, 18), (48, 48)] {
    let (a, b) = operands(a_width, b_width);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{a_width}x{b_width}")), &(a, b), |bencher, &(a, b)| {
      bencher.iter(|| multiply(black_box(a), black_box(b)));
    });
  }
  g.finish();
}

const VALUES: [i128; 4] = [-0x7f_ffff, -0x12_3480, 0x00_0080, 0x7f_ff7f];

fn round_model(c: &mut Criterion) {
  let mut g = c.benchmark_group("round");
  for mode in RoundingMode::ALL {
    let xs = VALUES.map(|x| Fixed::new(x, 24).unwrap());
    g.throughput(Throughput::Elements(xs.len() as u64));
    g.bench_with_input(BenchmarkId::from_parameter(mode), &xs, |bencher, xs| {
      bencher.iter(|| xs.map(|x| mode.round(black_box(x), 8)));
    });
  }
  g.finish();
}

fn round_hw_model(c: &mut Criterion) {
  let mut g = c.benchmark_group("round_hw");
  for mode in RoundingMode::ALL {
    let xs = VALUES.map(|x| Fixed::new(x, 24).unwrap());
    g.throughput(Throughput::Elements(xs.len() as u64));
    g.bench_with_input(BenchmarkId::from_parameter(mode), &xs, |bencher, xs| {
      bencher.iter(|| xs.map(|x| mode.round_hw(black_box(x), 8)));
    });
  }
  g.finish();
}

// Time one clock tick of each pipeline, fully occupied

fn multiplier_tick(c: &mut Criterion) {
  let config = MultiplierConfig::new(16, 18);
  let mut mul = ComplexMultiplier::new(config).unwrap();
  let input = operands(config.a_width, config.b_width);
  c.bench_function("multiplier_tick", |b| {
    b.iter(|| mul.tick(black_box(Some(input))));
  });
}

fn rounder_tick(c: &mut Criterion) {
  let mut g = c.benchmark_group("rounder_tick");
  for mode in [RoundingMode::Floor, RoundingMode::HalfEven] {
    let mut rounder = SignedRounder::new(RounderConfig::new(16, 8, mode)).unwrap();
    let x = Fixed::new(VALUES[1], 24).unwrap();
    g.bench_function(BenchmarkId::from_parameter(mode), |b| {
      b.iter(|| rounder.tick(black_box(Some(x))));
    });
  }
  g.finish();
}

fn pack_unpack(c: &mut Criterion) {
  let (a, _) = operands(16, 16);
  c.bench_function("pack_unpack", |b| {
    b.iter(|| {
      let bits = pack(black_box(a), PackingMethod::ReToHigh);
      unpack(&bits, 16, 16, PackingMethod::ReToHigh)
    });
  });
}

criterion_group!(baseline,
  baseline_i64_mul,
);

criterion_group!(model,
  multiply_model,
  round_model,
  round_hw_model,
  pack_unpack,
);

criterion_group!(pipeline,
  multiplier_tick,
  rounder_tick,
);

criterion_main!(baseline, model, pipeline);
