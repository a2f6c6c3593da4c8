use geokern::{
    Angle, BoundedRandom, BoundedRay, ByteLayout, Direction, GeomError, Line, LineLike, Location, OriginSphere,
    Plane, Ray, Rotation, Sphere, Tolerance, Vect,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_text_round_trip_for_every_shape() {
    let line = Line::new(Location::new(1.5, -2.0, 0.125), Direction::new(3.0, -1.0, 2.0));
    let ray = Ray::new(Location::new(0.1, 0.2, 0.3), Direction::backward());
    let segment = BoundedRay::new(Location::new(-4.0, 0.0, 9.5), Location::new(1e-3, 7.0, -2.0));
    let plane = Plane::new(Direction::new(0.3, 0.4, -0.2), 12.5).unwrap();
    let sphere = Sphere::new(Location::new(9.0, -9.0, 0.5), 3.25);

    assert_eq!(line.to_string().parse::<Line>().unwrap(), line);
    assert_eq!(ray.to_string().parse::<Ray>().unwrap(), ray);
    assert_eq!(segment.to_string().parse::<BoundedRay>().unwrap(), segment);
    assert_eq!(plane.to_string().parse::<Plane>().unwrap(), plane);
    assert_eq!(sphere.to_string().parse::<Sphere>().unwrap(), sphere);
    assert_eq!(Direction::None.to_string(), "<0, 0, 0>");
    assert_eq!("<0, 0, 0>".parse::<Direction>().unwrap(), Direction::None);
}

#[test]
fn test_text_rejects_malformed_input() {
    assert!(matches!("Sphere[Center <0, 0, 0>]".parse::<Sphere>(), Err(GeomError::Parse(_))));
    assert!(matches!("Sphere[Center <0, 0, 0> | Radius abc]".parse::<Sphere>(), Err(GeomError::Parse(_))));
    assert!("90".parse::<Angle>().is_err());
    assert!("<1, x, 3>".parse::<Vect>().is_err());
}

#[test]
fn test_byte_round_trip_for_every_shape() {
    let line = Line::new(Location::new(1.5, -2.0, 0.125), Direction::new(3.0, -1.0, 2.0));
    let segment = BoundedRay::new(Location::new(-4.0, 0.0, 9.5), Location::new(1e-3, 7.0, -2.0));
    let plane = Plane::new(Direction::new(0.3, 0.4, -0.2), 12.5).unwrap();
    let origin_sphere = OriginSphere::new(0.75);

    assert_eq!(Line::read_le_bytes(&line.to_le_bytes_vec()).unwrap(), line);
    assert_eq!(BoundedRay::read_le_bytes(&segment.to_le_bytes_vec()).unwrap(), segment);
    assert_eq!(Plane::read_le_bytes(&plane.to_le_bytes_vec()).unwrap(), plane);
    assert_eq!(OriginSphere::read_le_bytes(&origin_sphere.to_le_bytes_vec()).unwrap(), origin_sphere);

    let rotation = Rotation::from_angle_around_axis(Angle::from_degrees(40.0), Direction::up());
    let decoded = Rotation::read_le_bytes(&rotation.to_le_bytes_vec()).unwrap();
    assert!(decoded.approx_eq(&rotation, 1e-6));
}

#[test]
fn test_byte_buffer_length_is_checked() {
    let ray = Ray::new(Location::ORIGIN, Direction::up());
    let mut short = vec![0u8; Ray::SERIALIZED_LEN - 1];
    assert_eq!(
        ray.write_le_bytes(&mut short),
        Err(GeomError::BufferTooShort { needed: 24, actual: 23 })
    );
    assert!(Ray::read_le_bytes(&short).is_err());
}

#[test]
fn test_json_round_trip() {
    let segment = BoundedRay::new(Location::new(0.0, 1.0, 0.0), Location::new(100.0, 1.0, 0.0));
    let json = serde_json::to_string(&segment).unwrap();
    let decoded: BoundedRay = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, segment);

    let plane = Plane::new(Direction::up(), -1.0).unwrap();
    let decoded: Plane = serde_json::from_str(&serde_json::to_string(&plane).unwrap()).unwrap();
    assert_eq!(decoded, plane);

    let bad_plane = r#"{"normal":{"x":0.0,"y":0.0,"z":0.0},"distance_from_origin":1.0}"#;
    assert!(serde_json::from_str::<Plane>(bad_plane).is_err());
}

#[test]
fn test_tolerance_from_json_config() {
    let tolerance: Tolerance =
        serde_json::from_str(r#"{"line_thickness": 0.5, "angular_degrees": 10.0}"#).unwrap();
    assert_eq!(tolerance.line_thickness, 0.5);
    assert_eq!(tolerance.plane_thickness, Tolerance::default().plane_thickness);

    let a = Line::new(Location::ORIGIN, Direction::left());
    let b = Line::new(Location::new(0.0, 0.4, 0.0), Direction::new(1.0, 0.1, 0.0));
    assert!(a.is_colinear_within(&b, &tolerance));
    assert!(!a.is_colinear_with(&b));
}

#[test]
fn test_random_shapes_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let min = Sphere::new(Location::new(-1.0, -1.0, -1.0), 1.0);
    let max = Sphere::new(Location::new(1.0, 1.0, 1.0), 3.0);
    for _ in 0..100 {
        let sphere = Sphere::random_between(&min, &max, &mut rng);
        let c = sphere.center();
        assert!([c.x(), c.y(), c.z()].iter().all(|v| (-1.0..1.0).contains(v)));
        assert!((1.0..3.0).contains(&sphere.radius()));
    }

    let low = Ray::new(Location::ORIGIN, Direction::new(-1.0, -1.0, -1.0));
    let high = Ray::new(Location::new(5.0, 5.0, 5.0), Direction::new(1.0, 1.0, 1.0));
    for _ in 0..100 {
        let ray = Ray::random_between(&low, &high, &mut rng);
        assert!(ray.direction().is_some());
    }
}
