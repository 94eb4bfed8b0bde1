use std::fmt::Write as _;

use crate::error::MorphError;
use crate::geometry::limits;
use crate::model::{Point, Segment};
use crate::path::{Path, PathSink};
use crate::subpath::Subpath;

impl Path {
    /// Parse SVG path data (`M m L l H h V v Q q C c Z z`).
    pub fn from_svg(d: &str) -> Result<Path, MorphError> {
        Ok(Path::from_segments(parse_path_data(d)?))
    }

    /// Absolute SVG path data for every subpath.
    pub fn to_svg(&self) -> String {
        let mut w = SvgPathWriter::default();
        self.emit(&mut w);
        w.finish()
    }
}

impl Subpath {
    pub fn to_svg(&self) -> String {
        let mut w = SvgPathWriter::default();
        for seg in self.commands() {
            w.emit(seg);
        }
        w.finish()
    }
}

/// Writes a command stream as absolute SVG path data.
#[derive(Debug, Default)]
pub struct SvgPathWriter {
    out: String,
}

impl SvgPathWriter {
    pub fn finish(self) -> String {
        self.out
    }

    fn command(&mut self, c: char, points: &[Point]) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(c);
        for p in points {
            let _ = write!(self.out, " {} {}", p.x, p.y);
        }
    }
}

impl PathSink for SvgPathWriter {
    fn emit(&mut self, segment: Segment) {
        match segment {
            Segment::Move { to } => self.command('M', &[to]),
            Segment::Line { to } => self.command('L', &[to]),
            Segment::QuadCurve { to, control } => self.command('Q', &[control, to]),
            Segment::CubicCurve {
                to,
                control1,
                control2,
            } => self.command('C', &[control1, control2, to]),
            Segment::Close => self.command('Z', &[]),
        }
    }
}

const COMMANDS: &[u8] = b"MmLlHhVvQqCcZz";

struct Parser<'a> {
    bytes: &'a [u8],
    i: usize,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while let Some(&c) = self.bytes.get(self.i) {
            if c == b' ' || c == b'\n' || c == b'\t' || c == b'\r' || c == b',' {
                self.i += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.i).copied()
    }

    fn at_number(&mut self) -> bool {
        self.skip_ws();
        matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == b'.' || c == b'-' || c == b'+')
    }

    fn eat_digits(&mut self) -> bool {
        let start = self.i;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.i += 1;
        }
        self.i > start
    }

    // sign? digits? ('.' digits?)? (e sign? digits)?
    fn number(&mut self) -> Result<f64, MorphError> {
        self.skip_ws();
        let start = self.i;
        if matches!(self.peek(), Some(b'-' | b'+')) {
            self.i += 1;
        }
        let mut had = self.eat_digits();
        if self.peek() == Some(b'.') {
            self.i += 1;
            had |= self.eat_digits();
        }
        if !had {
            return Err(MorphError::svg(start, "expected number"));
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.i;
            self.i += 1;
            if matches!(self.peek(), Some(b'-' | b'+')) {
                self.i += 1;
            }
            if !self.eat_digits() {
                self.i = mark;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.i])
            .map_err(|_| MorphError::svg(start, "invalid number"))?;
        let v: f64 = text
            .parse()
            .map_err(|_| MorphError::svg(start, format!("invalid number '{text}'")))?;
        if !limits::in_coord_bounds(v) {
            return Err(MorphError::svg(start, format!("coordinate {text} out of range")));
        }
        Ok(v)
    }

    fn point(&mut self, relative: bool, cur: Point) -> Result<Point, MorphError> {
        let x = self.number()?;
        let y = self.number()?;
        let p = if relative {
            Point::new(cur.x + x, cur.y + y)
        } else {
            Point::new(x, y)
        };
        if !limits::in_coord_bounds(p.x) || !limits::in_coord_bounds(p.y) {
            return Err(MorphError::svg(self.i, "coordinate out of range"));
        }
        Ok(p)
    }
}

pub(crate) fn parse_path_data(d: &str) -> Result<Vec<Segment>, MorphError> {
    if d.len() > limits::MAX_SVG_TOKENS {
        return Err(MorphError::limit("path data length", limits::MAX_SVG_TOKENS));
    }
    let mut p = Parser {
        bytes: d.as_bytes(),
        i: 0,
    };
    let mut out = Vec::new();
    let mut cur = Point::ZERO;
    let mut start_sub = Point::ZERO;
    let mut cmd_count = 0usize;
    let mut subpaths = 0usize;
    let mut segs = 0usize;

    loop {
        p.skip_ws();
        let Some(c) = p.peek() else {
            break;
        };
        if !c.is_ascii_alphabetic() {
            return Err(MorphError::svg(p.i, "expected command"));
        }
        if !COMMANDS.contains(&c) {
            return Err(MorphError::svg(p.i, format!("unsupported command '{}'", c as char)));
        }
        let at = p.i;
        p.i += 1;
        cmd_count += 1;
        if cmd_count > limits::MAX_SVG_COMMANDS {
            return Err(MorphError::limit("path commands", limits::MAX_SVG_COMMANDS));
        }
        let relative = c.is_ascii_lowercase();

        if c == b'Z' || c == b'z' {
            out.push(Segment::Close);
            cur = start_sub;
            continue;
        }
        if !p.at_number() {
            return Err(MorphError::svg(at, format!("'{}' needs arguments", c as char)));
        }

        let mut first = true;
        loop {
            let seg = match c.to_ascii_uppercase() {
                b'M' if first => {
                    subpaths += 1;
                    if subpaths > limits::MAX_SVG_SUBPATHS {
                        return Err(MorphError::limit("subpaths", limits::MAX_SVG_SUBPATHS));
                    }
                    let to = p.point(relative, cur)?;
                    start_sub = to;
                    Segment::move_to(to)
                }
                // pairs after the first moveto are implicit linetos
                b'M' | b'L' => Segment::line_to(p.point(relative, cur)?),
                b'H' => {
                    let x = p.number()?;
                    Segment::line_to(Point::new(if relative { cur.x + x } else { x }, cur.y))
                }
                b'V' => {
                    let y = p.number()?;
                    Segment::line_to(Point::new(cur.x, if relative { cur.y + y } else { y }))
                }
                b'Q' => {
                    let control = p.point(relative, cur)?;
                    let to = p.point(relative, cur)?;
                    Segment::quad_to(to, control)
                }
                _ => {
                    let control1 = p.point(relative, cur)?;
                    let control2 = p.point(relative, cur)?;
                    let to = p.point(relative, cur)?;
                    Segment::curve_to(to, control1, control2)
                }
            };
            if !matches!(seg, Segment::Move { .. }) {
                segs += 1;
                if segs > limits::MAX_SVG_SEGMENTS {
                    return Err(MorphError::limit("path segments", limits::MAX_SVG_SEGMENTS));
                }
            }
            if let Some(to) = seg.end_point() {
                if !limits::in_coord_bounds(to.x) || !limits::in_coord_bounds(to.y) {
                    return Err(MorphError::svg(p.i, "coordinate out of range"));
                }
                cur = to;
            }
            out.push(seg);
            first = false;
            if !p.at_number() {
                break;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SegmentKind;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn parses_absolute_commands() {
        let segs = parse_path_data("M0 0 L10,0 Q 15 5 10 10 C 8 12, 2 12, 0 10 Z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::move_to(pt(0.0, 0.0)),
                Segment::line_to(pt(10.0, 0.0)),
                Segment::quad_to(pt(10.0, 10.0), pt(15.0, 5.0)),
                Segment::curve_to(pt(0.0, 10.0), pt(8.0, 12.0), pt(2.0, 12.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn relative_and_axis_commands() {
        let segs = parse_path_data("m5 5 h10 v10 H0 V-2 l1 1 z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::move_to(pt(5.0, 5.0)),
                Segment::line_to(pt(15.0, 5.0)),
                Segment::line_to(pt(15.0, 15.0)),
                Segment::line_to(pt(0.0, 15.0)),
                Segment::line_to(pt(0.0, -2.0)),
                Segment::line_to(pt(1.0, -1.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn implicit_repetition_and_compact_numbers() {
        let segs = parse_path_data("M0,0 10,0 10-10L.5.5 1e1-1.5e0").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::move_to(pt(0.0, 0.0)),
                Segment::line_to(pt(10.0, 0.0)),
                Segment::line_to(pt(10.0, -10.0)),
                Segment::line_to(pt(0.5, 0.5)),
                Segment::line_to(pt(10.0, -1.5)),
            ]
        );
    }

    #[test]
    fn relative_after_close_starts_at_subpath_start() {
        let segs = parse_path_data("M10 10 l5 0 l0 5 z l1 1").unwrap();
        assert_eq!(segs.last(), Some(&Segment::line_to(pt(11.0, 11.0))));
    }

    #[test]
    fn errors_report_offsets() {
        let err = parse_path_data("M0 0 L5").unwrap_err();
        assert!(matches!(err, MorphError::SvgParse { offset: 7, .. }), "{err:?}");
        let err = parse_path_data("M0 0 A1 1 0 0 1 5 5").unwrap_err();
        assert!(matches!(err, MorphError::SvgParse { offset: 5, .. }), "{err:?}");
        let err = parse_path_data("10 10").unwrap_err();
        assert!(matches!(err, MorphError::SvgParse { offset: 0, .. }));
        let err = parse_path_data("M 1e9 0").unwrap_err();
        assert_eq!(err.code(), "svg_parse");
        assert!(parse_path_data("L").is_err());
    }

    #[test]
    fn empty_input_is_empty_path() {
        assert!(Path::from_svg("").unwrap().is_empty());
        assert!(Path::from_svg("  \n ").unwrap().is_empty());
    }

    #[test]
    fn writer_round_trip() {
        let p = Path::from_svg("M0 0 L10 0 Q15 5 10 10 C8 12 2 12 0 10 Z M20 20 L30.5 20").unwrap();
        let d = p.to_svg();
        assert_eq!(
            d,
            "M 0 0 L 10 0 Q 15 5 10 10 C 8 12 2 12 0 10 L 0 0 Z M 20 20 L 30.5 20"
        );
        assert_eq!(Path::from_svg(&d).unwrap(), p);
        let sub = &p.subpaths()[1];
        assert_eq!(sub.to_svg(), "M 20 20 L 30.5 20");
        assert_eq!(sub.kinds().collect::<Vec<_>>(), vec![SegmentKind::Line]);
    }
}
