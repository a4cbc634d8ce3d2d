use approx::assert_relative_eq;
use frustum_lab::camera::orbit_to_eye_offset;
use frustum_lab::clip::to_ndc;
use frustum_lab::input::{InputEvent, Key, PointerButton, ScrollDirection};
use frustum_lab::math::vec4::Vec4;
use frustum_lab::render::{RenderBackend, SoftwareBackend};
use frustum_lab::{
    build_perspective_projection, compute_frustum_bounds, SessionState, ViewerConfig,
    VisualizationMode, Visualizer,
};

#[test]
fn reference_frustum_bounds() {
    let bounds = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
    assert_relative_eq!(bounds.top, 0.1428, epsilon = 1e-4);
    assert_relative_eq!(bounds.right, 0.1428, epsilon = 1e-4);
    assert_eq!(bounds.left, -bounds.right);
    assert_eq!(bounds.bottom, -bounds.top);
}

#[test]
fn bounds_keep_aspect_ratio() {
    for &(fov, aspect, near) in &[(10.0, 0.25, 0.01), (60.0, 16.0 / 9.0, 1.0), (170.0, 3.0, 5.0)] {
        let bounds = compute_frustum_bounds(fov, aspect, near).unwrap();
        assert!(bounds.right > 0.0 && bounds.top > 0.0);
        assert_relative_eq!(bounds.right / bounds.top, aspect, max_relative = 1e-5);
    }
}

#[test]
fn frustum_maps_onto_ndc_cube() {
    let (near, far) = (0.1, 20.0);
    let b = compute_frustum_bounds(110.0, 1.0, near).unwrap();
    let p = build_perspective_projection(b.left, b.right, b.bottom, b.top, near, far).unwrap();

    let near_center = to_ndc(Vec4::point(0.0, 0.0, -near), &p).unwrap();
    let far_center = to_ndc(Vec4::point(0.0, 0.0, -far), &p).unwrap();
    assert_relative_eq!(near_center.z, -1.0, epsilon = 1e-5);
    assert_relative_eq!(far_center.z, 1.0, epsilon = 1e-5);

    let left = to_ndc(Vec4::point(b.left, 0.0, -near), &p).unwrap();
    let right = to_ndc(Vec4::point(b.right, 0.0, -near), &p).unwrap();
    let bottom = to_ndc(Vec4::point(0.0, b.bottom, -near), &p).unwrap();
    let top = to_ndc(Vec4::point(0.0, b.top, -near), &p).unwrap();
    assert_relative_eq!(left.x, -1.0, epsilon = 1e-5);
    assert_relative_eq!(right.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(bottom.y, -1.0, epsilon = 1e-5);
    assert_relative_eq!(top.y, 1.0, epsilon = 1e-5);
}

#[test]
fn builds_are_repeatable() {
    let a = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
    let b = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
    assert_eq!(a, b);
    let pa = build_perspective_projection(a.left, a.right, a.bottom, a.top, 0.1, 20.0).unwrap();
    let pb = build_perspective_projection(b.left, b.right, b.bottom, b.top, 0.1, 20.0).unwrap();
    assert_eq!(pa, pb);
}

#[test]
fn orbit_offset_properties() {
    let offset = orbit_to_eye_offset(45.0, 30.0, 25.0);
    assert_relative_eq!(offset.magnitude(), 25.0, epsilon = 1e-4);
    assert_relative_eq!(orbit_to_eye_offset(200.0, 0.0, 3.0).y, 0.0);
    assert_relative_eq!(orbit_to_eye_offset(10.0, 90.0, 3.0).y, 3.0, epsilon = 1e-6);
}

#[test]
fn three_triggers_return_to_start() {
    let config = ViewerConfig::default();
    let controller = config.camera.controller;
    let mut session = SessionState::from_config(&config);
    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(session.handle_event(&InputEvent::KeyDown(Key::Space), &controller));
        seen.push(session.mode);
    }
    assert_eq!(
        seen,
        [
            VisualizationMode::ClipSpaceDemo,
            VisualizationMode::ManualProjection,
            VisualizationMode::FrustumOverlay,
        ]
    );
}

#[test]
fn interaction_pins_camera_to_limits() {
    let config = ViewerConfig::default();
    let controller = config.camera.controller;
    let mut session = SessionState::from_config(&config);

    session.handle_event(
        &InputEvent::PointerDown {
            button: PointerButton::Left,
            x: 0,
            y: 0,
        },
        &controller,
    );
    session.handle_event(&InputEvent::PointerMove { x: 0, y: 500 }, &controller);
    assert_eq!(session.camera.pitch(), 89.0);

    for _ in 0..100 {
        session.handle_event(&InputEvent::Scroll(ScrollDirection::Down), &controller);
    }
    assert_eq!(session.camera.distance(), 50.0);
}

#[test]
fn software_frames_draw_something_in_every_mode() {
    let config = ViewerConfig::default();
    let visualizer = Visualizer::new(&config).unwrap();
    let mut backend = SoftwareBackend::new(200, 200);
    let mut session = SessionState::from_config(&config);

    for mode in VisualizationMode::ALL {
        session.mode = mode;
        let report = visualizer.render_frame(&session, &mut backend);
        assert_eq!(report.mode, mode);
        assert_eq!(report.skipped_points, 0);

        let background = frustum_lab::colors::BACKGROUND;
        let lit = (0..200)
            .flat_map(|y| (0..200).map(move |x| (x, y)))
            .filter(|&(x, y)| backend.renderer().pixel(x, y) != Some(background))
            .count();
        assert!(lit > 0, "{mode} drew nothing");
    }

    // A fresh clear wipes the previous frame
    backend.clear_frame();
    assert_eq!(
        backend.renderer().pixel(100, 100),
        Some(frustum_lab::colors::BACKGROUND)
    );
}
