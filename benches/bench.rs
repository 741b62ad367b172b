// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::*;

use moonmap::{project, GridSampler, ProjectionConfig};

fn config() -> ProjectionConfig {
    ProjectionConfig {
        rotation_deg: -16.0,
        libration_latitude_deg: -6.6,
        libration_longitude_deg: -6.5,
        phase: -0.35,
        ..ProjectionConfig::for_image(4000, 3000)
    }
}

fn projection(c: &mut Criterion) {
    let config = config();
    c.bench_function("project", |b| {
        b.iter(|| project(black_box(-43.3), black_box(-11.22), &config))
    });
}

fn grid_sampling(c: &mut Criterion) {
    let config = config();
    let sampler = GridSampler::default();
    c.bench_function("grid lines", |b| {
        b.iter(|| {
            (
                sampler.parallels(&config),
                sampler.meridians(&config),
                sampler.terminator(&config),
            )
        })
    });

    let fine = GridSampler::new(5, 1);
    c.bench_function("fine grid lines", |b| {
        b.iter(|| (fine.parallels(&config), fine.meridians(&config)))
    });
}

criterion_group!(benches, projection, grid_sampling);
criterion_main!(benches);
