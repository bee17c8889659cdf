use crate::{geo::*, id::*};

/// A stored position that drives refer to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub pos: Coordinate,
}
