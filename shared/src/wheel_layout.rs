//! Geometry of the wheel inside a 100x100 SVG view box.
//!
//! Angles use SVG conventions: 0 degrees points right and positive angles
//! turn clockwise, so the pointer at the top sits at -90 degrees.

pub const VIEW_CENTER: f64 = 50.0;
pub const WEDGE_RADIUS: f64 = 48.0;
pub const LABEL_DISTANCE: f64 = 30.0;
pub const LABEL_LINE_HEIGHT: f64 = 3.5;
pub const POINTER_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
    pub label_angle: f64,
}

fn point_on_rim(angle: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (
        VIEW_CENTER + WEDGE_RADIUS * radians.cos(),
        VIEW_CENTER + WEDGE_RADIUS * radians.sin(),
    )
}

pub fn wedge(index: usize, slice_count: usize) -> Wedge {
    let slice_size = 360.0 / slice_count as f64;
    let start_angle = slice_size * index as f64 + POINTER_ANGLE;
    let end_angle = slice_size * (index + 1) as f64 + POINTER_ANGLE;
    let (start_x, start_y) = point_on_rim(start_angle);
    let (end_x, end_y) = point_on_rim(end_angle);
    let large_arc = if slice_size > 180.0 { 1 } else { 0 };

    // A single-prize wheel is a full circle; an arc with equal endpoints
    // draws nothing, so split it in two.
    let path = if slice_count == 1 {
        let (mid_x, mid_y) = point_on_rim(start_angle + 180.0);
        format!(
            "M {c} {c} L {sx} {sy} A {r} {r} 0 0 1 {mx} {my} A {r} {r} 0 0 1 {sx} {sy} Z",
            c = VIEW_CENTER,
            r = WEDGE_RADIUS,
            sx = start_x,
            sy = start_y,
            mx = mid_x,
            my = mid_y,
        )
    } else {
        format!(
            "M {c} {c} L {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey} Z",
            c = VIEW_CENTER,
            r = WEDGE_RADIUS,
            large = large_arc,
            sx = start_x,
            sy = start_y,
            ex = end_x,
            ey = end_y,
        )
    };

    Wedge {
        start_angle,
        end_angle,
        path,
        label_angle: start_angle + slice_size / 2.0,
    }
}

pub fn wedges(slice_count: usize) -> Vec<Wedge> {
    (0..slice_count).map(|index| wedge(index, slice_count)).collect()
}

/// Label transform for text drawn upright at the center: rotate it about
/// the center to the wedge middle, then push it out toward the rim.
pub fn label_transform(wedge: &Wedge) -> String {
    format!(
        "rotate({} {c} {c}) translate(0 -{d})",
        wedge.label_angle - POINTER_ANGLE,
        c = VIEW_CENTER,
        d = LABEL_DISTANCE,
    )
}

/// Wedge labels are broken into one word per line.
pub fn label_lines(label: &str) -> Vec<&str> {
    label.split_whitespace().collect()
}

/// Where the middle of a wedge ends up after the wheel has turned by
/// `rotation` degrees, normalized to [0, 360).
pub fn settled_angle(wedge: &Wedge, rotation: f64) -> f64 {
    (wedge.label_angle + rotation).rem_euclid(360.0)
}
