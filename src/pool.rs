/// Live obstacles, kept in spawn order.

use crate::config::RunnerConfig;
use crate::entities::{Obstacle, ObstacleKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstaclePool {
    obstacles: Vec<Obstacle>,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Place a new obstacle just past the right edge, standing on the ground.
    pub fn spawn_at_edge(&mut self, kind: ObstacleKind, config: &RunnerConfig) {
        self.add(Obstacle {
            x: config.field_width,
            y: config.ground_y - config.obstacle_height,
            width: config.obstacle_width,
            height: config.obstacle_height,
            kind,
        });
    }

    /// Scroll every obstacle left by `speed` units.
    pub fn tick(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed as f32;
        }
    }

    /// Drop obstacles whose right edge has left the field.  Returns how many
    /// were removed.
    pub fn cull(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right() >= 0.0);
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObstaclePool {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
