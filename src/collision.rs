/// Axis-aligned overlap tests between the dino, the ground and obstacles.
///
/// Collision is binary: any overlap with any obstacle ends the run, so the
/// order in which obstacles are tested never changes the outcome.

use crate::entities::{Dino, Obstacle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn of_dino(dino: &Dino) -> Self {
        Self::new(dino.x, dino.y, dino.width, dino.height)
    }

    pub fn of_obstacle(obstacle: &Obstacle) -> Self {
        Self::new(obstacle.x, obstacle.y, obstacle.width, obstacle.height)
    }
}

/// Strict overlap on both axes; boxes that only share an edge do not touch.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom
}

/// Grounded iff the bottom edge is at or below the ground line.
pub fn on_ground(dino: &Aabb, ground_y: f32) -> bool {
    dino.bottom >= ground_y
}

/// Index of the first obstacle overlapping the dino, if any.
pub fn first_hit<'a, I>(dino: &Dino, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let dino_box = Aabb::of_dino(dino);
    obstacles
        .into_iter()
        .position(|o| overlaps(&dino_box, &Aabb::of_obstacle(o)))
}
