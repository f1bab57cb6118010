use beryl::utils::ApproxEq;
use beryl::vec::{Vec2, Vec3};

const SAMPLES: [Vec3; 6] = [
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(-4.0, 0.5, 2.0),
    Vec3::new(0.001, 0.0, -0.002),
    Vec3::new(1e3, -2e3, 5e2),
    Vec3::new(0.0, 0.0, -7.0),
    Vec3::new(3.0, 4.0, 0.0),
];

#[test]
fn test_vec2_math() {
    let v1 = Vec2::new(1.0, 2.0);
    let v2 = Vec2::new(3.0, 4.0);
    assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
    assert_eq!(v1 - v2, Vec2::new(-2.0, -2.0));
    assert_eq!(v1 * v2, Vec2::new(3.0, 8.0));
    assert_eq!(v2 / v1, Vec2::new(3.0, 2.0));
    assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(v1 / 2.0, Vec2::new(0.5, 1.0));
    assert_eq!(v1.dot(v2), 11.0);
    assert_eq!(v2.length(), 5.0);
    assert_eq!(v2.length_squared(), 25.0);
}

#[test]
fn test_vec3_math() {
    let v1 = Vec3::new(1.0, 2.0, 3.0);
    let v2 = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(v1.cross(v2), Vec3::new(-3.0, 6.0, -3.0));
    assert_eq!(v1.dot(v2), 32.0);
    assert_eq!(2.0 * v1, Vec3::new(2.0, 4.0, 6.0));

    let mut v = v1;
    v += v2;
    v -= v1;
    v *= 2.0;
    v /= Vec3::new(2.0, 5.0, 3.0);
    assert_eq!(v, Vec3::new(4.0, 2.0, 4.0));
}

#[test]
fn test_normalization() {
    let v = Vec3::new(1.0, 0.0, 0.0);
    assert_eq!(v.normalize(), v);

    let v = Vec3::new(2.0, 0.0, 0.0);
    assert_eq!(v.normalize(), Vec3::new(1.0, 0.0, 0.0));

    for v in SAMPLES {
        assert!(v.normalize().length().approx_eq(&1.0), "{v}");
        assert!(v.xy().normalize().length().approx_eq(&1.0) || v.xy() == Vec2::ZERO);
    }
}

#[test]
fn test_cross_is_orthogonal() {
    for a in SAMPLES {
        for b in SAMPLES {
            let c = a.cross(b).normalize();
            if c.x.is_nan() {
                continue; // parallel pair
            }
            assert!(c.dot(a.normalize()).abs() < 1e-4);
            assert!(c.dot(b.normalize()).abs() < 1e-4);
        }
    }
}

#[test]
fn test_component_setters() {
    let mut v = Vec3::ZERO;
    v.y = 2.0;
    v.z = -1.0;
    assert_eq!(v, Vec3::new(0.0, 2.0, -1.0));
}
