use pathmorph::{CentroidAlignment, MorphOptions, MorphPair, Path, Point, Segment, Subpath, Weight};
use std::time::Instant;

const PLANE: &[(f64, f64)] = &[
    (8986.7, 4989.8), (8266.5, 4568.4), (7465.8, 3742.8), (6766.7, 3013.0),
    (6584.7, 3013.0), (3977.8, 3080.0), (936.1, 3118.3), (361.5, 2294.7),
    (420.9, 2003.6), (2539.3, 1248.9), (4604.1, 553.6), (3039.2, -1225.8),
    (2342.0, -1162.6), (1658.2, -1084.1), (1577.8, -1122.4), (541.6, -2030.3),
    (637.4, -2398.1), (1240.7, -2585.8), (1809.6, -2742.9), (1796.2, -2823.3),
    (1725.3, -3512.9), (2512.5, -3625.9), (2698.3, -3553.1), (2912.8, -4081.8),
    (3148.4, -4654.5), (3615.8, -4675.6), (4305.3, -3694.9), (4360.8, -3547.4),
    (4217.1, -2842.5), (4096.4, -2160.6), (4906.6, -1269.9), (5691.9, -411.8),
    (5724.5, -484.6), (7526.9, -4395.8), (7877.4, -4460.9), (8266.2, -4150.6),
    (8624.4, -3792.4), (8289.2, -927.0), (7911.9, 1913.5), (8565.1, 2756.3),
    (9494.1, 3953.4), (9656.9, 4545.3), (9474.9, 4964.8),
];

// Silhouette scaled into a `size` box, preserving aspect ratio.
fn plane(size: f64) -> Path {
    let (mut minx, mut miny) = (f64::INFINITY, f64::INFINITY);
    let (mut maxx, mut maxy) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in PLANE {
        minx = minx.min(x); miny = miny.min(y);
        maxx = maxx.max(x); maxy = maxy.max(y);
    }
    let s = size / (maxx - minx).max(maxy - miny);
    let pts: Vec<Point> = PLANE.iter().map(|&(x, y)| Point::new((x - minx) * s, (y - miny) * s)).collect();
    Path::from(Subpath::polygon(&pts))
}

// Four-arc cubic circle.
fn circle(center: Point, r: f64) -> Path {
    let k = 0.552_284_749_8 * r;
    let (cx, cy) = (center.x, center.y);
    Path::from(Subpath::closed(
        Point::new(cx + r, cy),
        [
            Segment::curve_to(Point::new(cx, cy + r), Point::new(cx + r, cy + k), Point::new(cx + k, cy + r)),
            Segment::curve_to(Point::new(cx - r, cy), Point::new(cx - k, cy + r), Point::new(cx - r, cy + k)),
            Segment::curve_to(Point::new(cx, cy - r), Point::new(cx - r, cy - k), Point::new(cx - k, cy - r)),
            Segment::curve_to(Point::new(cx + r, cy), Point::new(cx + k, cy - r), Point::new(cx + r, cy - k)),
        ],
    ))
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let mut factor = 3usize;
    let mut iters = 200usize;
    let mut frames = 60usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--factor=") { if let Ok(v)=val.parse() { factor=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--frames=") { if let Ok(v)=val.parse() { frames=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let from = plane(300.0);
    let to = circle(Point::new(150.0, 150.0), 150.0);
    let mut options = MorphOptions { segment_factor: factor, centroid: CentroidAlignment::At { center: Point::new(150.0, 150.0) }, ..MorphOptions::default() };
    options.from.shift = 6;
    options.from.weights = vec![Weight::new(0.0, 0.5), Weight::new(0.2, 1.0)];

    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let start_all = Instant::now();
    let mut segments = 0usize;
    let mut shortfall = 0usize;
    for _ in 0..iters {
        let t0 = Instant::now();
        let pair = match MorphPair::prepare(&from, &to, &options) {
            Ok(p) => p,
            Err(e) => { eprintln!("prepare failed: {}", e); std::process::exit(2); }
        };
        let out = pair.frames(frames);
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        segments = out.first().map_or(0, Path::segment_count);
        shortfall = pair.shortfall();
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    println!("factor={} iters={} frames={} segments={} shortfall={} total_ms={:.3} median_ms={:.4} p90_ms={:.4}", factor, iters, frames, segments, shortfall, dur_all, med, p90);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
