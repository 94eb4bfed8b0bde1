//! Point and vector algebra.
//!
//! Points are positions, vectors are displacements. Subtracting two points
//! yields a vector; adding a vector to a point yields a point.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::model::{Point, Vector};

impl Point {
    /// Vector from `start` to `self`.
    #[inline]
    pub fn vector_from(self, start: Point) -> Vector {
        Vector::between(start, self)
    }

    /// Point at factor `k` on the way from `self` to `other`. `k` is not
    /// clamped; `k = 0` and `k = 1` return the end points exactly.
    #[inline]
    pub fn lerp(self, other: Point, k: f64) -> Point {
        let j = 1.0 - k;
        Point::new(self.x * j + other.x * k, self.y * j + other.y * k)
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Vector {
    #[inline]
    pub fn between(start: Point, end: Point) -> Vector {
        Vector::new(end.x - start.x, end.y - start.y)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Magnitude of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Unit vector with the same direction, or zero for a zero-length vector.
    pub fn unit(self) -> Vector {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            Vector::ZERO
        }
    }

    /// Perpendicular vector, rotated a quarter turn clockwise in y-up space.
    #[inline]
    pub fn normal(self) -> Vector {
        Vector::new(self.dy, -self.dx)
    }

    /// Unsigned angle to `other` in radians. Zero when either vector has no length.
    pub fn angle_to(self, other: Vector) -> f64 {
        let denom = self.length() * other.length();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::between(rhs, self)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.dx / rhs, self.dy / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        let v = b - a;
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert_eq!(v.length(), 5.0);
        assert_eq!(a + v, b);
        assert_eq!(b - v, a);
        assert_eq!(-v, Vector::new(-3.0, -4.0));
        assert_eq!(v * 2.0 - v, v);
        assert!(((v / 5.0).length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_is_unclamped() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.25), Point::new(2.5, 0.0));
        assert_eq!(a.lerp(b, 1.5), Point::new(15.0, 0.0));
        assert_eq!(a.lerp(b, -0.5), Point::new(-5.0, 0.0));
    }

    #[test]
    fn test_unit_and_normal() {
        let v = Vector::new(0.0, 3.0);
        assert_eq!(v.unit(), Vector::new(0.0, 1.0));
        assert_eq!(Vector::ZERO.unit(), Vector::ZERO);
        assert_eq!(v.normal(), Vector::new(3.0, 0.0));
        assert_eq!(v.normal().dot(v), 0.0);
    }

    #[test]
    fn test_angle_to() {
        let x = Vector::new(1.0, 0.0);
        let y = Vector::new(0.0, 2.0);
        assert!((x.angle_to(y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((x.angle_to(-x) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(x.angle_to(Vector::ZERO), 0.0);
        // Nearly parallel vectors must not produce NaN from acos rounding.
        let a = Vector::new(1.0, 1e-9);
        assert!(!x.angle_to(a).is_nan());
    }
}
