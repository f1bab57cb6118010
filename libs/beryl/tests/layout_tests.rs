use beryl::{Mat3, Mat4, MathError, Quat, Vec2, Vec3};
use core::mem::size_of;

#[test]
fn test_sizes_match_float_counts() {
    assert_eq!(size_of::<Vec2>(), 2 * 4);
    assert_eq!(size_of::<Vec3>(), 3 * 4);
    assert_eq!(size_of::<Quat>(), 4 * 4);
    assert_eq!(size_of::<Mat3>(), 9 * 4);
    assert_eq!(size_of::<Mat4>(), 16 * 4);
}

#[test]
fn test_mat3_column_major_indices() {
    let m = Mat3::from_translation(Vec2::new(7.0, 8.0));
    let a = m.as_array();
    assert_eq!((a[6], a[7], a[8]), (7.0, 8.0, 1.0));
    assert_eq!(Mat3::from_cols_array(a), m);
    assert_eq!(<[f32; 9]>::from(m), *a);
}

#[test]
fn test_mat4_column_major_indices() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(&m.as_array()[12..], &[1.0, 2.0, 3.0, 1.0]);
    assert_eq!(m.to_cols_array(), *m.as_array());

    let p = Mat4::perspective(1.0, 1.0, 1.0, 2.0);
    assert_eq!(p.as_array()[11], -1.0);
    assert_eq!(p.as_array()[15], 0.0);
}

#[test]
fn test_vertex_slice_cast() {
    let verts = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&verts);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let bytes: &[u8] = bytemuck::bytes_of(&Mat4::IDENTITY);
    assert_eq!(bytes.len(), 64);
}

#[test]
fn test_array_conversions() {
    assert_eq!(Vec2::from([1.0, 2.0]), Vec2::new(1.0, 2.0));
    assert_eq!(<[f32; 3]>::from(Vec3::new(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0]);
    assert_eq!(Quat::from([0.0, 0.0, 0.0, 1.0]), Quat::IDENTITY);
    assert_eq!(Quat::IDENTITY.to_array(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(Vec3::Z.as_array(), &[0.0, 0.0, 1.0]);
}

#[test]
fn test_checked_variants_report_errors() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(Vec3::ZERO.try_normalize(), Err(MathError::ZeroLength));
    assert_eq!(Quat::try_from_axis_angle(Vec3::ZERO, 1.0), Err(MathError::ZeroLength));
    assert_eq!(
        Quat::try_from_axis_angle(Vec3::new(0.0, 2.0, 0.0), 1.0),
        Ok(Quat::from_axis_angle(Vec3::Y, 1.0))
    );

    let err = Mat4::ZERO.try_inverse().unwrap_err();
    assert_eq!(err.to_string(), "matrix is singular (determinant 0)");
    assert_eq!(
        MathError::ZeroLength.to_string(),
        "cannot normalize a zero-length vector"
    );
}

#[test]
fn test_unchecked_variants_never_panic() {
    assert!(Quat::from_axis_angle(Vec3::ZERO, 1.0).x.is_nan());
    assert!(Mat4::ZERO.inverse().as_array().iter().all(|e| !e.is_finite()));
    assert!(Mat4::from_axis_angle(Vec3::ZERO, 1.0).cols[0][0].is_nan());
}

#[test]
fn test_display_quat() {
    assert_eq!(format!("{:.2}", Quat::IDENTITY), "[0.00, 0.00, 0.00, 1.00]");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let m = Mat4::look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(serde_json::from_str::<Mat4>(&json).unwrap(), m);

    let v: Vec3 = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).unwrap();
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}
