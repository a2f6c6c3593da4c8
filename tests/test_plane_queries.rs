use geokern::{
    Angle, BoundedRay, Direction, Line, LineLike, Location, Pivot, Plane, PlaneObjectRelationship, Ray,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ground() -> Plane {
    Plane::new(Direction::up(), 0.0).expect("valid normal")
}

#[test]
fn test_plane_rejects_zero_normal() {
    init_logging();
    assert!(Plane::new(Direction::None, 1.0).is_err());
    assert!(Plane::from_triangle(Location::ORIGIN, Location::new(1.0, 0.0, 0.0), Location::new(2.0, 0.0, 0.0)).is_err());
}

#[test]
fn test_signed_distance_and_relationship() {
    let plane = Plane::new(Direction::up(), 2.0).unwrap();
    assert_eq!(plane.signed_distance_from(&Location::new(7.0, 5.0, -1.0)), 3.0);

    let above = BoundedRay::new(Location::new(0.0, 3.0, 0.0), Location::new(0.0, 4.0, 0.0));
    let below = BoundedRay::new(Location::new(0.0, -3.0, 0.0), Location::new(5.0, -1.0, 0.0));
    let across = BoundedRay::new(Location::new(0.0, 0.0, 0.0), Location::new(0.0, 4.0, 0.0));
    assert_eq!(above.relationship_to_plane(&plane), PlaneObjectRelationship::PlaneFacesTowardsObject);
    assert_eq!(below.relationship_to_plane(&plane), PlaneObjectRelationship::PlaneFacesAwayFromObject);
    assert_eq!(across.relationship_to_plane(&plane), PlaneObjectRelationship::PlaneIntersectsObject);
    assert_eq!(above.signed_distance_from_plane(&plane), 1.0);
    assert_eq!(below.signed_distance_from_plane(&plane), -3.0);

    // An unbounded line that is not parallel always crosses.
    let line = Line::new(Location::new(0.0, 50.0, 0.0), Direction::new(1.0, 1.0, 0.0));
    assert_eq!(line.distance_from_plane(&plane), 0.0);
}

#[test]
fn test_plane_intersection_respects_bounds() {
    let plane = ground();
    let toward = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));
    let away = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, 1.0, 0.0));
    let parallel = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::left());

    let hit = toward.intersection_with_plane(&plane).expect("ray heads into the plane");
    assert!(hit.approx_eq(&Location::new(4.0, 0.0, 0.0), 1e-4));
    assert!(away.intersection_with_plane(&plane).is_none());
    assert!(parallel.intersection_with_plane(&plane).is_none());
    assert!(Line::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, 1.0, 0.0)).is_intersected_by_plane(&plane));
}

#[test]
fn test_split_shares_crossing_point() {
    init_logging();
    let plane = ground();
    let segment = BoundedRay::new(Location::new(0.0, -5.0, 0.0), Location::new(0.0, 5.0, 0.0));
    let (head, tail) = segment.split_by_plane(&plane).expect("segment crosses");

    assert_eq!(head.start_point(), segment.start_point());
    assert_eq!(tail.end_point(), segment.end_point());
    assert_eq!(head.end_point(), tail.start_point());
    assert_eq!(head.end_point(), Location::ORIGIN);

    // Neither piece changes side in its interior.
    for i in 1..10 {
        let t = i as f32 / 10.0;
        assert!(plane.signed_distance_from(&head.bounded_location_at_distance(t * head.length())) < 0.0);
        assert!(plane.signed_distance_from(&tail.bounded_location_at_distance(t * tail.length())) > 0.0);
    }
}

#[test]
fn test_split_by_kind() {
    let plane = ground();
    let ray = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));
    let (head, tail) = ray.split_by_plane(&plane).expect("ray crosses");
    assert!(head.end_point().approx_eq(&Location::new(4.0, 0.0, 0.0), 1e-4));
    assert_eq!(head.end_point(), tail.start_point());
    assert_eq!(tail.direction(), ray.direction());

    let line = Line::new(Location::new(0.0, 3.0, 0.0), Direction::down());
    let (back, front) = line.split_by_plane(&plane).expect("line crosses");
    assert_eq!(back.start_point(), front.start_point());
    assert!(back.direction().approx_eq(&Direction::up(), 1e-6));
    assert!(front.direction().approx_eq(&Direction::down(), 1e-6));

    assert!(Ray::new(Location::new(0.0, 4.0, 0.0), Direction::up()).split_by_plane(&plane).is_none());
    let short = BoundedRay::new(Location::new(0.0, 1.0, 0.0), Location::new(0.0, 2.0, 0.0));
    assert!(short.split_by_plane(&plane).is_none());
}

#[test]
fn test_reflection_preserves_angle() {
    init_logging();
    let plane = ground();
    let ray = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));
    let reflected = ray.reflected_by_plane(&plane).expect("ray hits the plane");

    assert!(reflected.start_point().approx_eq(&Location::new(4.0, 0.0, 0.0), 1e-4));
    assert!(reflected.direction().approx_eq(&Direction::new(1.0, 1.0, 0.0), 1e-5));
    assert!(plane.contains(&reflected.start_point(), 0.0));

    let incident = ray.incident_angle_with_plane(&plane).expect("ray hits the plane");
    assert!(incident.approx_eq(&Angle::from_degrees(45.0), 1e-5));
    assert_eq!(reflected.incident_angle_with_plane(&plane), Some(incident));
}

fn sweep_start(i: usize, j: usize) -> Location {
    Location::new(i as f32 * 1.7 - 9.0, 3.0 + j as f32 * 2.3, ((i * j) % 5) as f32 * 0.37 - 1.0)
}

fn sweep_direction(i: usize, j: usize) -> Direction {
    Direction::new(i as f32 * 0.21 - 1.2, -(j as f32) * 0.4, 0.9 - j as f32 * 0.13)
}

#[test]
fn test_reflected_ray_starts_on_plane_and_keeps_incident_angle() {
    init_logging();
    let plane = ground();
    for i in 0..12 {
        for j in 1..8 {
            let ray = Ray::new(sweep_start(i, j), sweep_direction(i, j));
            let reflected = ray.reflected_by_plane(&plane).expect("ray heads into the plane");
            let incident = ray.incident_angle_with_plane(&plane).expect("ray heads into the plane");
            let again = reflected.incident_angle_with_plane(&plane).expect("reflection starts on the plane");
            assert!(again.approx_eq(&incident, 1e-5), "ray {ray}: {again} vs {incident}");
            assert!(reflected.is_intersected_by_plane(&plane));
        }
    }
}

#[test]
fn test_reflection_off_tilted_plane_keeps_incident_angle() {
    let plane = Plane::new(Direction::new(0.3, 1.0, -0.2), 1.5).unwrap();
    for i in 0..12 {
        for j in 1..8 {
            let ray = Ray::new(sweep_start(i, j), sweep_direction(i, j));
            let segment = BoundedRay::from_start_direction_and_length(ray.start_point(), ray.direction(), 1000.0);
            let incident = ray.incident_angle_with_plane(&plane).expect("ray heads into the plane");

            let reflected_ray = ray.reflected_by_plane(&plane).expect("ray heads into the plane");
            let again = reflected_ray.incident_angle_with_plane(&plane).expect("reflection starts on the plane");
            assert!(again.approx_eq(&incident, 1e-4), "ray {ray}: {again} vs {incident}");

            let reflected_segment = segment.reflected_by_plane(&plane).expect("segment crosses");
            let again = reflected_segment.incident_angle_with_plane(&plane).expect("reflection starts on the plane");
            assert!(again.approx_eq(&incident, 1e-4), "segment {segment}: {again} vs {incident}");
        }
    }
}

#[test]
fn test_bounded_reflection_keeps_remaining_length() {
    let plane = ground();
    let segment = BoundedRay::new(Location::new(0.0, 4.0, 0.0), Location::new(6.0, -2.0, 0.0));
    let reflected = segment.reflected_by_plane(&plane).expect("segment crosses");
    assert!(reflected.start_point().approx_eq(&Location::new(4.0, 0.0, 0.0), 1e-4));
    assert!(reflected.end_point().approx_eq(&Location::new(6.0, 2.0, 0.0), 1e-4));

    let parallel = Ray::new(Location::new(0.0, 1.0, 0.0), Direction::left());
    assert!(parallel.reflected_by_plane(&plane).is_none());
    assert!(parallel.incident_angle_with_plane(&plane).is_none());
}

#[test]
fn test_projection_and_orientation() {
    let plane = ground();
    let segment = BoundedRay::new(Location::new(1.0, 2.0, 0.0), Location::new(4.0, 6.0, 0.0));

    let projected = segment.projected_on_to_plane(&plane);
    assert!(projected.start_point().approx_eq(&Location::new(1.0, 0.0, 0.0), 1e-5));
    assert!(projected.end_point().approx_eq(&Location::new(4.0, 0.0, 0.0), 1e-5));

    let flat = segment.parallelized_with_plane(&plane).expect("not along the normal");
    assert!(flat.start_point().approx_eq(&segment.start_point(), 1e-6));
    assert!((flat.length() - 5.0).abs() < 1e-4);
    assert!(flat.is_parallel_to_plane(&plane, Angle::from_degrees(0.1)));

    let upright = segment.orthogonalized_against_plane_around(&plane, Pivot::End).expect("not in the plane");
    assert!(upright.end_point().approx_eq(&segment.end_point(), 1e-5));
    assert!(upright.is_orthogonal_to_plane(&plane, Angle::from_degrees(0.1)));

    let lying = BoundedRay::new(Location::ORIGIN, Location::new(1.0, 0.0, 0.0));
    assert!(lying.orthogonalized_against_plane(&plane).is_none());
    let standing = BoundedRay::new(Location::ORIGIN, Location::new(0.0, 1.0, 0.0));
    assert!(standing.parallelized_with_plane(&plane).is_none());
}

#[test]
fn test_plane_plane_intersection() {
    let a = ground();
    let b = Plane::new(Direction::left(), 2.0).unwrap();
    let line = a.intersection_with_plane(&b).expect("planes meet");
    assert!(a.contains(&line.point_on_line(), 1e-5));
    assert!(b.contains(&line.point_on_line(), 1e-5));
    assert!(line.direction().is_parallel_to(&Direction::forward(), Angle::from_degrees(0.01)));

    let shifted = Plane::new(Direction::up(), 3.0).unwrap();
    assert!(a.intersection_with_plane(&shifted).is_none());
    assert_eq!(a.distance_from_plane(&shifted), 3.0);
    assert!(a.angle_to_plane(&b).approx_eq(&Angle::QUARTER_CIRCLE, 1e-6));
}
