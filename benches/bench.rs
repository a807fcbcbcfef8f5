#![feature(test)]
/// Notes
/// 1. Every projection bench has 10,000 points
/// 2. Building projector is out of the loop,
///    it is done once per zone and datum

extern crate test;

use test::Bencher;

use utmgeo::{
    build_forward_projector, build_inverse_projector, localize_point_on_line, Coordinate, Datum,
    LatLonCoord,
};

const REPEAT: usize = 500;
const POINTS: [LatLonCoord; 20] = [
    LatLonCoord::new(35.0, -106.0),
    LatLonCoord::new(35.084, -106.651),
    LatLonCoord::new(35.687, -105.938),
    LatLonCoord::new(32.319, -106.763),
    LatLonCoord::new(36.407, -105.573),
    LatLonCoord::new(34.058, -106.891),
    LatLonCoord::new(33.394, -104.523),
    LatLonCoord::new(36.728, -108.219),
    LatLonCoord::new(35.528, -108.742),
    LatLonCoord::new(32.899, -105.960),
    LatLonCoord::new(34.405, -103.205),
    LatLonCoord::new(36.899, -104.439),
    LatLonCoord::new(35.171, -103.725),
    LatLonCoord::new(33.138, -107.252),
    LatLonCoord::new(34.644, -106.775),
    LatLonCoord::new(35.887, -106.303),
    LatLonCoord::new(32.702, -103.136),
    LatLonCoord::new(36.590, -105.451),
    LatLonCoord::new(34.183, -103.335),
    LatLonCoord::new(33.943, -106.428),
];

fn points() -> Vec<LatLonCoord> {
    let mut ps = Vec::with_capacity(POINTS.len() * REPEAT);
    for _ in 0..REPEAT {
        ps.extend(POINTS);
    }
    ps
}

#[bench]
fn forward(b: &mut Bencher) {
    let projector = build_forward_projector(13, &Datum::WGS84);
    let ps = points();

    b.iter(|| {
        let _ = ps.iter().map(|p| projector.project(p)).collect::<Vec<_>>();
    });
}

#[bench]
fn inverse(b: &mut Bencher) {
    let forward = build_forward_projector(13, &Datum::WGS84);
    let projector = build_inverse_projector(13, false, &Datum::WGS84);
    let cs = forward.project_all(&points());

    b.iter(|| {
        let _ = cs.iter().map(|c| projector.project(c)).collect::<Vec<_>>();
    });
}

#[bench]
fn localize_line(b: &mut Bencher) {
    let forward = build_forward_projector(13, &Datum::WGS84);
    let line = forward.project_all(&POINTS);
    let ws: Vec<_> = (0..1_000)
        .map(|i| Coordinate::new(300000.0 + i as f64 * 400.0, 3600000.0 + i as f64 * 400.0))
        .collect();

    b.iter(|| {
        let _ = ws
            .iter()
            .map(|w| localize_point_on_line(w, &line))
            .collect::<Vec<_>>();
    });
}
