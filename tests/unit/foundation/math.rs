use super::*;

const EPS: f64 = 1e-9;

fn assert_mat_close(a: Mat3, b: Mat3) {
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (a.m[i][j] - b.m[i][j]).abs() < EPS,
                "mismatch at [{i}][{j}]: {:?} vs {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn dot_cross_length_basics() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(-4.0, 3.0);
    assert_eq!(dot(a, b), 0.0);
    assert_eq!(cross(a, b), 25.0);
    assert_eq!(cross(b, a), -25.0);
    assert_eq!(length(a), 5.0);
    assert_eq!(length(Vec2::ZERO), 0.0);
}

#[test]
fn matmul_is_associative() {
    let a = Mat3::rotate(0.7);
    let b = Mat3::translate(Vec2::new(3.0, -2.0));
    let c = Mat3::scale(1.5) * Mat3::reflect(0.3);
    assert_mat_close((a * b) * c, a * (b * c));
}

#[test]
fn matvec_of_product_matches_nested_matvec() {
    let a = Mat3::rotate(-1.1) * Mat3::scale(0.5);
    let b = Mat3::translate(Vec2::new(10.0, 20.0));
    let v = position(7.0, -3.0);
    let lhs = a.matmul(b).matvec(v);
    let rhs = a.matvec(b.matvec(v));
    for k in 0..3 {
        assert!((lhs[k] - rhs[k]).abs() < EPS);
    }
}

#[test]
fn translation_does_not_move_directions() {
    let t = Mat3::translate(Vec2::new(5.0, 5.0));
    assert_eq!(t.matvec([1.0, 2.0, 0.0]), [1.0, 2.0, 0.0]);
    assert_eq!(t.matvec(position(1.0, 2.0)), [6.0, 7.0, 1.0]);
}

#[test]
fn reflection_is_an_involution_and_fixes_its_axis() {
    let tau = 0.4;
    let m = Mat3::reflect(tau);
    assert_mat_close(m * m, Mat3::IDENTITY);
    let (x, y) = m.apply(tau.cos() * 3.0, tau.sin() * 3.0);
    assert!((x - tau.cos() * 3.0).abs() < EPS);
    assert!((y - tau.sin() * 3.0).abs() < EPS);
}

#[test]
fn agrees_with_kurbo_affine() {
    let m = Mat3::translate(Vec2::new(4.0, 1.0)) * Mat3::rotate(0.9) * Mat3::scale(2.0);
    let k = kurbo::Affine::translate(Vec2::new(4.0, 1.0))
        * kurbo::Affine::rotate(0.9)
        * kurbo::Affine::scale(2.0);
    let p = k * kurbo::Point::new(1.5, -2.0);
    let (x, y) = m.apply(1.5, -2.0);
    assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS);
}
