//! The lighting math exercised through the regress harness, the way the
//! engine's own regression suites consume both crates.

use glam::Vec3;
use radiant::prelude::*;
use radiant::{brdf, illuminance};
use regress::{add_test, check, RecordingOutput, TestCtx, TestSuite};

fn fresnel_limits(ctx: &mut TestCtx) {
    let f0 = Vec3::splat(0.04);
    check!(ctx, (brdf::fresnel_schlick(f0, 1.0) - f0).length() < 1e-6);
    check!(
        ctx,
        (brdf::fresnel_schlick(f0, 0.0) - Vec3::ONE).length() < 1e-6,
        "grazing reflectance reaches one"
    );
}

fn attenuation_window(ctx: &mut TestCtx) {
    let inv_r2 = 1.0 / (25.0 * 25.0);
    check!(ctx, illuminance::distance_window(25.0 * 25.0, inv_r2) < 1e-9);
    check!(ctx, illuminance::radial_attenuation(1.0, inv_r2) > 0.0);
}

fn light_data_layout(ctx: &mut TestCtx) {
    check!(ctx, std::mem::size_of::<LightData>() == 80);
    check!(ctx, std::mem::size_of::<LightData>() % 16 == 0);
}

fn backface_is_dark(ctx: &mut TestCtx) {
    let surface = SurfaceData::default();
    let below = LightData::pack(&Light::directional(Vec3::Y, Vec3::ONE, 1000.0));
    check!(
        ctx,
        directional_light_luminance(&surface, Vec3::Y, &below) == Vec3::ZERO
    );
}

fn lighting_suite() -> TestSuite {
    let mut brdf_suite = TestSuite::new("brdf");
    add_test!(brdf_suite, fresnel_limits);

    let mut suite = TestSuite::new("lighting");
    add_test!(suite, attenuation_window);
    add_test!(suite, light_data_layout);
    add_test!(suite, backface_is_dark);
    suite.add_suite(brdf_suite);
    suite
}

#[test]
fn regression_suite_passes() {
    let mut out = RecordingOutput::new();
    let report = lighting_suite().run(&mut out);

    assert!(out.failures.is_empty(), "failures: {:?}", out.failures);
    assert!(report.all_passed());
    assert_eq!(report.passed(), 4);
}

#[test]
fn broken_check_is_isolated() {
    fn wrong_stride(ctx: &mut TestCtx) {
        check!(ctx, std::mem::size_of::<LightData>() == 64, "wrong stride");
    }

    let mut suite = lighting_suite();
    add_test!(suite, wrong_stride);

    let mut out = RecordingOutput::new();
    let report = suite.run(&mut out);

    assert_eq!(report.failed(), 1);
    assert_eq!(report.passed(), 4);
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].2.desc, "wrong stride");
}
