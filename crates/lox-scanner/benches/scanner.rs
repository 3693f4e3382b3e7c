// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lox_scanner::{scan_tokens, ErrorLog};

const PROGRAM: &str = r#"
class Point {
  init(x, y) {
    this.x = x;
    this.y = y;
  }

  // Squared distance to another point.
  distance(other) {
    var dx = this.x - other.x;
    var dy = this.y - other.y;
    return dx * dx + dy * dy;
  }
}

fun fib(n) {
  if (n <= 1) return n;
  return fib(n - 2) + fib(n - 1);
}

var i = 0;
while (i < 20) {
  print "fib " + fib(i);
  i = i + 1.5;
}
"#;

fn bench_scan(c: &mut Criterion) {
    let source = PROGRAM.repeat(64);

    let mut group = c.benchmark_group("scanner");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("program", |b| {
        b.iter(|| scan_tokens(black_box(&source), ErrorLog::new()))
    });
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
