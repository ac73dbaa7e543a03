use keyflux_core::{
    compile_frame, property, sequence_frames, AnimError, AnimationBuilder, ChannelDelta,
    EntityHandle, Keyframe, PropertyTarget, StyleAccessor, StyleMap,
};

#[derive(Default)]
struct FakeStyle {
    styles: StyleMap,
    inner_w: f32,
    inner_h: f32,
}

impl FakeStyle {
    fn with(styles: &[(&str, &str)]) -> Self {
        let mut s = Self::default();
        for (k, v) in styles {
            s.styles.insert((*k).to_string(), (*v).to_string());
        }
        s
    }
}

impl StyleAccessor for FakeStyle {
    fn get_style(&self, _target: &EntityHandle, name: &str) -> StyleMap {
        let mut map = StyleMap::new();
        let concrete: &[&str] = match property::expand(name) {
            Some(edges) => edges,
            None => std::slice::from_ref(&name),
        };
        for c in concrete {
            if let Some(v) = self.styles.get(*c) {
                map.insert((*c).to_string(), v.clone());
            }
        }
        map
    }

    fn inner_width(&self, _target: &EntityHandle) -> f32 {
        self.inner_w
    }

    fn inner_height(&self, _target: &EntityHandle) -> f32 {
        self.inner_h
    }

    fn set_style(&mut self, _target: &EntityHandle, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }
}

#[test]
fn no_synthetic_frame_without_loops() {
    let style = FakeStyle::with(&[("left", "0px")]);
    let anim = AnimationBuilder::new()
        .target("box")
        .keyframe(Keyframe::new().scalar("left", 10.0))
        .build();
    let frames = sequence_frames(&anim, &style).unwrap();
    assert_eq!(frames.len(), 1);
}

#[test]
fn closing_frame_captures_current_values_first_occurrence_wins() {
    let style = FakeStyle::with(&[("left", "25px"), ("backgroundColor", "#0a141e")]);
    let anim = AnimationBuilder::new()
        .target("box")
        .loops(3)
        .keyframe(
            Keyframe::new()
                .scalar("left", 100.0)
                .color("backgroundColor", "#fff"),
        )
        .keyframe(Keyframe::new().scalar("left", 50.0))
        .build();
    let frames = sequence_frames(&anim, &style).unwrap();
    assert_eq!(frames.len(), 3);

    let closing = &frames[2];
    // One entry per distinct property, not one per occurrence.
    assert_eq!(closing.props.len(), 2);
    assert_eq!(closing.get("left"), Some(&PropertyTarget::Scalar(25.0)));
    assert_eq!(
        closing.get("backgroundColor"),
        Some(&PropertyTarget::Color("#0a141e".into()))
    );
}

#[test]
fn closing_frame_timing_prefers_animation_defaults() {
    let style = FakeStyle::with(&[("left", "0px")]);

    let with_defaults = AnimationBuilder::new()
        .target("box")
        .loops(1)
        .duration(200)
        .timing("ease-out")
        .keyframe(Keyframe::new().scalar("left", 10.0).duration(50).timing("linear"))
        .build();
    let frames = sequence_frames(&with_defaults, &style).unwrap();
    assert_eq!(frames[1].duration, Some(200));
    assert_eq!(frames[1].timing.as_deref(), Some("ease-out"));

    // Defaults unset: fall back to the first keyframe's own overrides.
    let without_defaults = AnimationBuilder::new()
        .target("box")
        .loops(1)
        .keyframe(Keyframe::new().scalar("left", 10.0).duration(50).timing("ease-in"))
        .build();
    let frames = sequence_frames(&without_defaults, &style).unwrap();
    assert_eq!(frames[1].duration, Some(50));
    assert_eq!(frames[1].timing.as_deref(), Some("ease-in"));
}

#[test]
fn closing_frame_measures_dimensions_and_first_shorthand_edge() {
    let mut style = FakeStyle::with(&[
        ("borderTopWidth", "3px"),
        ("borderBottomWidth", "9px"),
    ]);
    style.inner_w = 120.0;
    let anim = AnimationBuilder::new()
        .target("box")
        .loops(1)
        .keyframe(Keyframe::new().scalar("width", 300.0).scalar("borderWidth", 6.0))
        .build();
    let frames = sequence_frames(&anim, &style).unwrap();
    let closing = &frames[1];
    assert_eq!(closing.get("width"), Some(&PropertyTarget::Scalar(120.0)));
    assert_eq!(
        closing.get("borderWidth"),
        Some(&PropertyTarget::Scalar(3.0))
    );
}

#[test]
fn sequencing_rejects_missing_target_and_empty_list() {
    let style = FakeStyle::default();

    let no_target = AnimationBuilder::new()
        .keyframe(Keyframe::new().scalar("left", 1.0))
        .build();
    assert!(matches!(
        sequence_frames(&no_target, &style),
        Err(AnimError::Config(_))
    ));

    let no_frames = AnimationBuilder::new().target("box").build();
    assert!(matches!(
        sequence_frames(&no_frames, &style),
        Err(AnimError::Config(_))
    ));
}

#[test]
fn sequencing_rejects_zero_durations() {
    let style = FakeStyle::with(&[("left", "0px")]);

    let zero_default = AnimationBuilder::new()
        .target("box")
        .duration(0)
        .keyframe(Keyframe::new().scalar("left", 1.0))
        .build();
    assert!(matches!(
        sequence_frames(&zero_default, &style),
        Err(AnimError::Config(_))
    ));

    let zero_frame = AnimationBuilder::new()
        .target("box")
        .keyframe(Keyframe::new().scalar("left", 1.0).duration(0))
        .build();
    assert!(matches!(
        sequence_frames(&zero_frame, &style),
        Err(AnimError::Config(_))
    ));
}

#[test]
fn multibyte_property_names_sequence_without_panicking() {
    let style = FakeStyle::default();
    let anim = AnimationBuilder::new()
        .target("box")
        .loops(1)
        .keyframe(Keyframe::new().scalar("\u{20ac}\u{20ac}", 5.0))
        .build();

    // Bogus names pass through sequencing (closing-frame capture included)
    // and surface as PropertyNotAnimatable when their frame is compiled.
    let frames = sequence_frames(&anim, &style).unwrap();
    assert_eq!(frames.len(), 2);
    let err = compile_frame(&frames[0], &anim, &style).unwrap_err();
    assert!(matches!(
        err,
        AnimError::PropertyNotAnimatable { property } if property == "\u{20ac}\u{20ac}"
    ));
}

#[test]
fn compile_measures_dimensions_through_the_accessor() {
    let mut style = FakeStyle::with(&[("width", "200px")]);
    style.inner_w = 180.0;
    let anim = AnimationBuilder::new()
        .target("box")
        .keyframe(Keyframe::new().scalar("width", 280.0))
        .build();
    let compiled = compile_frame(&anim.keyframes[0], &anim, &style).unwrap();
    match compiled.channels.get("width").unwrap() {
        ChannelDelta::Scalar(rec) => {
            // Content-box measurement, not the raw "width" style string.
            assert_eq!(rec.initial, 180.0);
            assert_eq!(rec.delta, 100.0);
        }
        other => panic!("unexpected channel: {other:?}"),
    }
}

#[test]
fn compile_resolves_duration_and_timing_with_frame_overrides() {
    let style = FakeStyle::with(&[("left", "0px")]);
    let anim = AnimationBuilder::new()
        .target("box")
        .duration(400)
        .timing("ease-out")
        .keyframe(Keyframe::new().scalar("left", 10.0))
        .keyframe(Keyframe::new().scalar("left", 20.0).duration(75).timing("linear"))
        .build();

    let first = compile_frame(&anim.keyframes[0], &anim, &style).unwrap();
    assert_eq!(first.duration, 400);
    assert_eq!(first.easing.name(), "ease-out");

    let second = compile_frame(&anim.keyframes[1], &anim, &style).unwrap();
    assert_eq!(second.duration, 75);
    assert_eq!(second.easing.name(), "linear");
}

#[test]
fn compile_defaults_apply_when_nothing_is_configured() {
    let style = FakeStyle::default();
    let anim = AnimationBuilder::new()
        .target("box")
        .keyframe(Keyframe::new().scalar("left", 10.0))
        .build();
    let compiled = compile_frame(&anim.keyframes[0], &anim, &style).unwrap();
    assert_eq!(compiled.duration, 500);
    assert_eq!(compiled.easing.name(), "linear");
    // Missing current style coerces to 0.
    match compiled.channels.get("left").unwrap() {
        ChannelDelta::Scalar(rec) => assert_eq!(rec.initial, 0.0),
        other => panic!("unexpected channel: {other:?}"),
    }
}
