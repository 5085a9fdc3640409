use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hypatia::{
    angle::Radians,
    matrix::{Matrix3, Matrix4},
    quaternion::UnitQuaternion,
    vector::{UnitVector3, Vector3, Vector4},
};

pub fn bench_vector3_normalize(c: &mut Criterion) {
    let v = Vector3::new(1.0, -2.0, 3.0);
    c.bench_function("vector3_normalize", |b| {
        b.iter(|| black_box(v).normalized())
    });
}

pub fn bench_matrix4_inverse(c: &mut Criterion) {
    let m = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0))
        * Matrix4::rotation_y(Radians(0.4))
        * Matrix4::scaling(&Vector3::new(2.0, 1.0, 0.5));
    c.bench_function("matrix4_inverse", |b| b.iter(|| black_box(m).inverted()));
}

pub fn bench_matrix4_vector_multiplication(c: &mut Criterion) {
    let m = Matrix4::rotation_z(Radians(1.1)) * Matrix4::translation(&Vector3::same(1.0));
    let v = Vector4::new(0.5, -1.0, 2.0, 1.0);
    c.bench_function("matrix4_vector_multiplication", |b| {
        b.iter(|| black_box(m) * black_box(v))
    });
}

pub fn bench_quaternion_rotate_vector(c: &mut Criterion) {
    let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_y(), Radians(0.7));
    let v = Vector3::new(1.0, 2.0, 3.0);
    c.bench_function("quaternion_rotate_vector", |b| {
        b.iter(|| black_box(rotation).rotate_vector(&black_box(v)))
    });
}

pub fn bench_quaternion_from_rotation_matrix(c: &mut Criterion) {
    let m = Matrix3::rotation_x(Radians(2.5)) * Matrix3::rotation_z(Radians(-0.3));
    c.bench_function("quaternion_from_rotation_matrix", |b| {
        b.iter(|| UnitQuaternion::from_rotation_matrix(&black_box(m)))
    });
}

criterion_group!(
    benches,
    bench_vector3_normalize,
    bench_matrix4_inverse,
    bench_matrix4_vector_multiplication,
    bench_quaternion_rotate_vector,
    bench_quaternion_from_rotation_matrix
);
criterion_main!(benches);
