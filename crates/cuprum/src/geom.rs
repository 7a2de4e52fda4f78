//! Exact integer geometry for board coordinates.
//!
//! Positions are given in the board's internal length unit (a nanometer
//! grid), so coincidence, collinearity and on-segment tests are exact
//! integer comparisons rather than epsilon checks. Predicate arithmetic
//! widens to `i128`; a cross or dot product of two `i64` vectors cannot
//! overflow there.

pub type Unit = euclid::UnknownUnit;

/// Board-internal length, in nanometers.
pub type Length = i64;

pub type Point = euclid::Point2D<Length, Unit>;
pub type Vector = euclid::Vector2D<Length, Unit>;

pub fn point(x: Length, y: Length) -> Point {
    euclid::point2(x, y)
}

fn cross(a: Vector, b: Vector) -> i128 {
    (a.x as i128) * (b.y as i128) - (a.y as i128) * (b.x as i128)
}

fn dot(a: Vector, b: Vector) -> i128 {
    (a.x as i128) * (b.x as i128) + (a.y as i128) * (b.y as i128)
}

/// Whether `p` lies on the straight line through `a` and `b`, strictly
/// between them. Endpoints do not count, and `a == b` never matches.
pub fn collinear_between(a: Point, p: Point, b: Point) -> bool {
    cross(p - a, b - a) == 0 && dot(p - a, b - p) > 0
}

/// Crossing point of the open interiors of segments `a1..a2` and `b1..b2`.
///
/// Shared endpoints and mere touching do not count, and parallel or
/// collinear pairs return `None`; overlap between collinear lines is the
/// business of the coalescing and merging passes, not of this predicate.
/// The crossing is also required to fall exactly on the integer grid:
/// a crossing with a fractional coordinate cannot be represented as an
/// anchor position and is reported as no crossing at all.
pub fn segment_crossing(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let r = a2 - a1;
    let s = b2 - b1;
    let mut den = cross(r, s);
    if den == 0 {
        return None;
    }

    // Solve a1 + t*r = b1 + u*s; normalize the denominator so the interior
    // checks below read as plain 0 < t < 1.
    let qp = b1 - a1;
    let mut t_num = cross(qp, s);
    let mut u_num = cross(qp, r);
    if den < 0 {
        den = -den;
        t_num = -t_num;
        u_num = -u_num;
    }
    if t_num <= 0 || t_num >= den || u_num <= 0 || u_num >= den {
        return None;
    }

    let x_num = (a1.x as i128) * den + t_num * (r.x as i128);
    let y_num = (a1.y as i128) * den + t_num * (r.y as i128);
    if x_num % den != 0 || y_num % den != 0 {
        return None;
    }
    Some(point((x_num / den) as Length, (y_num / den) as Length))
}
