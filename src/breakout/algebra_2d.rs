use std::ops::Add;

use egui::{Pos2, Rect};

/// Point in world coordinates. TOP / LEFT corner is 0/0
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IPos2 {
    pub x: i32,
    pub y: i32,
}

impl IPos2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<IPos2> for Pos2 {
    fn from(value: IPos2) -> Self {
        Pos2::new(value.x as f32, value.y as f32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<IVec2> for IPos2 {
    type Output = IPos2;

    fn add(self, rhs: IVec2) -> Self::Output {
        IPos2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AaBB {
    pub min: IPos2,
    pub max: IPos2,
}

impl AaBB {
    pub const fn from_pos_size(left_x: i32, upper_y: i32, len_x: i32, len_y: i32) -> Self {
        Self {
            min: IPos2::new(left_x, upper_y),
            max: IPos2::new(left_x + len_x, upper_y + len_y),
        }
    }

    pub fn len_x(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn len_y(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        AaBB {
            min: IPos2::new(self.min.x + dx, self.min.y + dy),
            max: IPos2::new(self.max.x + dx, self.max.y + dy),
        }
    }

    /// true when both boxes share a non-empty interior.
    /// Boxes which merely touch at an edge or a corner do not intersect; neither does an empty box.
    pub fn intersects(&self, other: &AaBB) -> bool {
        if self.len_x() <= 0 || self.len_y() <= 0 || other.len_x() <= 0 || other.len_y() <= 0 {
            return false;
        }
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

impl From<AaBB> for Rect {
    fn from(value: AaBB) -> Self {
        Rect::from_min_max(value.min.into(), value.max.into())
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::AaBB;

    #[rstest]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(5, 5, 10, 10), true)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(2, 2, 3, 3), true)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(10, 0, 10, 10), false)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(0, 10, 10, 10), false)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(10, 10, 5, 5), false)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(9, 9, 5, 5), true)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(-5, -5, 5, 20), false)]
    #[case(AaBB::from_pos_size(0, 0, 10, 10), AaBB::from_pos_size(4, 4, 0, 2), false)]
    fn test_intersects(#[case] a: AaBB, #[case] b: AaBB, #[case] expected: bool) {
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }

    #[test]
    fn test_translate() {
        let moved = AaBB::from_pos_size(1, 2, 3, 4).translate(-1, 10);
        assert_eq!(moved, AaBB::from_pos_size(0, 12, 3, 4));
        assert_eq!((moved.len_x(), moved.len_y()), (3, 4));
    }
}
