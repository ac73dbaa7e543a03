use criterion::{black_box, criterion_group, criterion_main, Criterion};

use keyflux_core::{
    interpolate, AnimationBuilder, Easing, EntityHandle, Keyframe, PlaybackController,
    StyleAccessor, StyleMap,
};

struct NullStyle;

impl StyleAccessor for NullStyle {
    fn get_style(&self, _target: &EntityHandle, name: &str) -> StyleMap {
        let mut map = StyleMap::new();
        map.insert(name.to_string(), "0px".to_string());
        map
    }

    fn inner_width(&self, _target: &EntityHandle) -> f32 {
        0.0
    }

    fn inner_height(&self, _target: &EntityHandle) -> f32 {
        0.0
    }

    fn set_style(&mut self, _target: &EntityHandle, _name: &str, _value: &str) {}
}

fn bench_interpolate(c: &mut Criterion) {
    c.bench_function("interpolate_ease_out", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..100 {
                let p = i as f32 / 100.0;
                acc += interpolate(Easing::EaseOut, black_box(p), 0.0, 480.0);
            }
            acc
        })
    });
}

fn bench_tick_loop(c: &mut Criterion) {
    c.bench_function("playback_100_ticks", |b| {
        b.iter(|| {
            let anim = AnimationBuilder::new()
                .target("box")
                .keyframe(
                    Keyframe::new()
                        .scalar("left", 480.0)
                        .scalar("top", 270.0)
                        .color("backgroundColor", "rgb(10,20,30)")
                        .duration(1000),
                )
                .build();
            let mut ctl = PlaybackController::new(anim);
            let mut style = NullStyle;
            ctl.start(&style).unwrap();
            for i in 0..=100u32 {
                ctl.tick(f64::from(i) * 10.0, &mut style).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_interpolate, bench_tick_loop);
criterion_main!(benches);
