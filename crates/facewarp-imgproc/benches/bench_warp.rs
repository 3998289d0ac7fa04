use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use facewarp_image::{Image, ImageSize};
use facewarp_imgproc::{
    interpolation::{InterpolationMode, ResampleOptions},
    parallel::ExecutionStrategy,
    warp::{get_rotation_matrix2d, warp_affine},
};

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        // output image, the canonical aligned face size
        let output = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 112,
                height: 112,
            },
            0,
        )
        .unwrap();
        let m = get_rotation_matrix2d((*width as f32 / 2.0, *height as f32 / 2.0), 45.0, 0.5);

        for (name, interpolation, strategy) in [
            ("bilinear_serial", InterpolationMode::Bilinear, ExecutionStrategy::Serial),
            ("bilinear_par", InterpolationMode::Bilinear, ExecutionStrategy::ParallelRows),
            ("nearest_serial", InterpolationMode::Nearest, ExecutionStrategy::Serial),
        ] {
            let options = ResampleOptions {
                interpolation,
                strategy,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image, &output, m),
                |b, i| {
                    let (src, mut dst, m) = (i.0.clone(), i.1.clone(), i.2);
                    b.iter(|| {
                        warp_affine(
                            black_box(&src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(&options),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
