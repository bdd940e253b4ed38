// Copyright 2021 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Integer rasterization of lines, circles and triangles.
//!
//! Each shape is an iterator over points or spans, so that it can be checked
//! without a panel. [`St7796`] feeds them to `pixel()`, `vline()` and
//! `hline()`. Nothing here clips: points off the panel are dropped later by
//! the window check.
//!
//! The arithmetic is done in wider integers. Points and span starts that
//! fall outside of `i32` saturate to its bounds, far away from any panel.
//!
//! [`St7796`]: ../struct.St7796.html

/// A run of `len` pixels starting at `(x, y)`. Whether it runs down or to
/// the right depends on the iterator it comes from.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Span {
    pub x: i32,
    pub y: i32,
    pub len: i32,
}

fn saturate<T: Into<i128>>(value: T) -> i32 {
    value.into().clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Points of a one pixel wide line, by Bresenham's algorithm.
///
/// The major axis is always walked forward, so both directions of the same
/// segment produce the same points.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Line {
    let (x0, y0, x1, y1) =
        (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut x0, mut y0, mut x1, mut y1) =
        if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    Line{
        steep,
        x: x0,
        x_end: x1,
        y: y0,
        dx,
        dy: (y1 - y0).abs(),
        err: dx / 2,
        ystep: if y0 < y1 { 1 } else { -1 },
        done: false,
    }
}

/// Iterator returned by [line()].
#[derive(Clone, Debug)]
pub struct Line {
    steep: bool,
    x: i64,
    x_end: i64,
    y: i64,
    dx: i64,
    dy: i64,
    err: i64,
    ystep: i64,
    done: bool,
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let (x, y) = (saturate(self.x), saturate(self.y));
        let point = if self.steep { (y, x) } else { (x, y) };
        self.err -= self.dy;
        if self.err < 0 {
            self.y += self.ystep;
            self.err += self.dx;
        }
        if self.x == self.x_end {
            self.done = true;
        } else {
            self.x += 1;
        }
        Some(point)
    }
}

/// Midpoint circle state shared by the outline and the filled variant.
#[derive(Clone, Debug)]
struct Midpoint {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl Midpoint {
    fn new(radius: i32) -> Self {
        Self{f: 1 - radius, ddf_x: 1, ddf_y: -2 * radius, x: 0, y: radius}
    }

    /// Moves to the next octant point; `None` once `x` reaches `y`.
    fn step(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

/// `center + offset`, saturated.
fn offset(center: i32, offset: i32) -> i32 {
    saturate(i64::from(center) + i64::from(offset))
}

/// Points of a circle outline: the 4 axis points, then 8 symmetric points
/// per step of the midpoint algorithm. Points where octants meet come out
/// more than once.
pub fn circle_points(x0: i32, y0: i32, radius: u16) -> CirclePoints {
    let r = i32::from(radius);
    let mut batch = [(0, 0); 8];
    batch[..4].copy_from_slice(&[
        (x0, offset(y0, r)), (x0, offset(y0, -r)),
        (offset(x0, r), y0), (offset(x0, -r), y0),
    ]);
    CirclePoints{x0, y0, m: Midpoint::new(r), batch, len: 4, pos: 0}
}

/// Iterator returned by [circle_points()].
#[derive(Clone, Debug)]
pub struct CirclePoints {
    x0: i32,
    y0: i32,
    m: Midpoint,
    batch: [(i32, i32); 8],
    len: usize,
    pos: usize,
}

impl Iterator for CirclePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.pos == self.len {
            let (x, y) = self.m.step()?;
            let (x0, y0) = (self.x0, self.y0);
            self.batch = [
                (offset(x0, x), offset(y0, y)), (offset(x0, -x), offset(y0, y)),
                (offset(x0, x), offset(y0, -y)), (offset(x0, -x), offset(y0, -y)),
                (offset(x0, y), offset(y0, x)), (offset(x0, -y), offset(y0, x)),
                (offset(x0, y), offset(y0, -x)), (offset(x0, -y), offset(y0, -x)),
            ];
            self.len = 8;
            self.pos = 0;
        }
        let point = self.batch[self.pos];
        self.pos += 1;
        Some(point)
    }
}

/// Vertical spans covering a filled circle: the center column first, then
/// 4 columns per step of the midpoint algorithm.
pub fn circle_spans(x0: i32, y0: i32, radius: u16) -> CircleSpans {
    let r = i32::from(radius);
    let mut batch = [Span{x: 0, y: 0, len: 0}; 4];
    batch[0] = Span{x: x0, y: offset(y0, -r), len: 2 * r + 1};
    CircleSpans{x0, y0, m: Midpoint::new(r), batch, len: 1, pos: 0}
}

/// Iterator returned by [circle_spans()].
#[derive(Clone, Debug)]
pub struct CircleSpans {
    x0: i32,
    y0: i32,
    m: Midpoint,
    batch: [Span; 4],
    len: usize,
    pos: usize,
}

impl Iterator for CircleSpans {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.pos == self.len {
            let (x, y) = self.m.step()?;
            let (x0, y0) = (self.x0, self.y0);
            self.batch = [
                Span{x: offset(x0, x), y: offset(y0, -y), len: 2 * y + 1},
                Span{x: offset(x0, y), y: offset(y0, -x), len: 2 * x + 1},
                Span{x: offset(x0, -x), y: offset(y0, -y), len: 2 * y + 1},
                Span{x: offset(x0, -y), y: offset(y0, -x), len: 2 * x + 1},
            ];
            self.len = 4;
            self.pos = 0;
        }
        let span = self.batch[self.pos];
        self.pos += 1;
        Some(span)
    }
}

/// Horizontal spans covering a filled triangle, one per row from the top
/// vertex down to the bottom one.
///
/// The rows down to the middle vertex interpolate the top-middle and
/// top-bottom edges; the rest interpolate the middle-bottom and top-bottom
/// edges. Interpolation floors. A triangle with all three vertices on one
/// row is a single span.
pub fn triangle_spans(x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32)
        -> TriangleSpans {
    let mut v = [(x0, y0), (x1, y1), (x2, y2)];
    if v[0].1 > v[1].1 { v.swap(0, 1); }
    if v[1].1 > v[2].1 { v.swap(1, 2); }
    if v[0].1 > v[1].1 { v.swap(0, 1); }
    let [(x0, y0), (x1, y1), (x2, y2)] =
        v.map(|(x, y)| (i128::from(x), i128::from(y)));

    if y0 == y2 {
        let a = x0.min(x1).min(x2);
        let b = x0.max(x1).max(x2);
        return TriangleSpans{
            flat: Some(Span{x: saturate(a), y: saturate(y0),
                            len: saturate(b - a + 1)}),
            ..TriangleSpans::empty()
        };
    }

    let nonzero = |d: i128| if d == 0 { 1 } else { d };
    let mut t = TriangleSpans{
        flat: None,
        x0, x1, y0, y1, y2,
        dx01: x1 - x0, dy01: nonzero(y1 - y0),
        dx02: x2 - x0, dy02: nonzero(y2 - y0),
        dx12: x2 - x1, dy12: nonzero(y2 - y1),
        // A flat bottom ends the upper part on the middle row.
        last: if y1 == y2 { y1 } else { y1 - 1 },
        y: y0,
        sa: 0,
        sb: 0,
    };
    if t.y > t.last {
        t.enter_lower_part();
    }
    t
}

/// Iterator returned by [triangle_spans()].
///
/// The accumulators hold products of two coordinate differences, hence the
/// `i128` state.
#[derive(Clone, Debug)]
pub struct TriangleSpans {
    flat: Option<Span>,
    x0: i128,
    x1: i128,
    y0: i128,
    y1: i128,
    y2: i128,
    dx01: i128,
    dy01: i128,
    dx02: i128,
    dy02: i128,
    dx12: i128,
    dy12: i128,
    last: i128,
    y: i128,
    sa: i128,
    sb: i128,
}

impl TriangleSpans {
    fn empty() -> Self {
        Self{flat: None, x0: 0, x1: 0, y0: 0, y1: 0, y2: -1,
             dx01: 0, dy01: 1, dx02: 0, dy02: 1, dx12: 0, dy12: 1,
             last: -1, y: 0, sa: 0, sb: 0}
    }

    fn enter_lower_part(&mut self) {
        self.sa = self.dx12 * (self.y - self.y1);
        self.sb = self.dx02 * (self.y - self.y0);
    }

    fn span(&self, a: i128, b: i128) -> Span {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        Span{x: saturate(a), y: saturate(self.y), len: saturate(b - a + 1)}
    }
}

impl Iterator for TriangleSpans {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.flat.take() {
            return Some(span);
        }
        if self.y > self.y2 {
            return None;
        }
        let span = if self.y <= self.last {
            let a = self.x0 + self.sa.div_euclid(self.dy01);
            let b = self.x0 + self.sb.div_euclid(self.dy02);
            self.sa += self.dx01;
            self.sb += self.dx02;
            self.span(a, b)
        } else {
            let a = self.x1 + self.sa.div_euclid(self.dy12);
            let b = self.x0 + self.sb.div_euclid(self.dy02);
            self.sa += self.dx12;
            self.sb += self.dx02;
            self.span(a, b)
        };
        self.y += 1;
        if self.y == self.last + 1 {
            self.enter_lower_part();
        }
        Some(span)
    }
}
