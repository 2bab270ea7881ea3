use room_delaunay::{HasPosition, Point2};

#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzRoom {
    pub x: i32,
    pub y: i32,
}

impl HasPosition for FuzzRoom {
    fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl core::fmt::Debug for FuzzRoom {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Point2::new({:?}, {:?})", self.x, self.y))
    }
}
