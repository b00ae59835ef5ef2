//! Runs a few queries against the geometry primitives and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example clip
//! RUST_LOG=affine_geometry=trace cargo run --example clip
//! ```

use affine_geometry::math::{Point2, Point3, Vector2, Vector3};
use affine_geometry::{Box2, Circle3, Intersection, Line2, Line3, Plane3, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=affine_geometry=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip=info".parse().unwrap_or_default())
        .add_directive("affine_geometry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let unit = Box2::new(Point2::new(0.0, 0.0), 1.0, 1.0)?;
    for (point, dir) in [
        ((-1.0, 0.0), (0.5, 0.5)),
        ((-1.0, 1.0), (0.5, 0.0)),
        ((0.8, 0.0), (1.0, 2.0)),
    ] {
        let line = Line2::from_dir(Point2::new(point.0, point.1), Vector2::new(dir.0, dir.1))?;
        match unit.intersect(&line) {
            Intersection::Hit(s) => info!(p1 = ?s.p1(), p2 = ?s.p2(), "clipped"),
            Intersection::Miss => info!(?point, ?dir, "no intersection"),
            Intersection::Degenerate => info!(?point, ?dir, "degenerate"),
        }
    }

    let a = Line3::from_dir(Point3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 0.0, 0.0))?;
    let b = Line3::from_dir(Point3::origin(), Vector3::new(1.0, 4.0, 0.0))?;
    info!(distance = a.distance(&b), "line to line");

    let plane = Plane3::new(Point3::new(1.0, 1.0, 1.0), Vector3::x())?;
    let other = Plane3::new(Point3::new(0.0, 0.0, 2.0), Vector3::z())?;
    match plane.intersect_line(&b) {
        Ok(point) => info!(?point, "plane and line"),
        Err(err) => info!(%err, "plane and line"),
    }
    let meet = plane.intersect_plane(&other)?;
    info!(point = ?meet.point(), dir = ?meet.dir(), "plane and plane");

    let circle = Circle3::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 1.0, 1.0), 2.0)?;
    for step in 0..4 {
        let angle = f64::from(step) * std::f64::consts::FRAC_PI_2;
        info!(angle, point = ?circle.point_at(angle), "circle");
    }
    Ok(())
}
