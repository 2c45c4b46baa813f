//! Indexed obstacle arena with stable name lookup.
//!
//! The obstacle set is shared across the recycler, collision detector and
//! score accumulator within one tick. Modelling it as an arena keeps every
//! per-obstacle operation O(1) by index without pointer aliasing concerns:
//! obstacles are never removed during a session, so indices stay stable.

use std::collections::HashMap;

use anyhow::bail;

use crate::data_structures::obstacle::Obstacle;

#[derive(Debug, Default)]
pub struct ObstacleArena {
    obstacles: Vec<Obstacle>,
    by_name: HashMap<String, usize>,
}

impl ObstacleArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            obstacles: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an obstacle and return its index.
    ///
    /// Obstacle names double as identifiers for collision reports, so a
    /// duplicate name is a scene configuration error.
    pub fn insert(&mut self, obstacle: Obstacle) -> anyhow::Result<usize> {
        if self.by_name.contains_key(&obstacle.name) {
            bail!("duplicate obstacle name: {}", obstacle.name);
        }
        let idx = self.obstacles.len();
        self.by_name.insert(obstacle.name.clone(), idx);
        self.obstacles.push(obstacle);
        Ok(idx)
    }

    pub fn get(&self, idx: usize) -> Option<&Obstacle> {
        self.obstacles.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(idx)
    }

    pub fn by_name(&self, name: &str) -> Option<&Obstacle> {
        self.by_name.get(name).map(|&idx| &self.obstacles[idx])
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut Obstacle> {
        self.by_name
            .get(name)
            .map(|&idx| &mut self.obstacles[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Depth of the obstacle currently furthest from the viewer. Recycled
    /// obstacles are repositioned relative to this value. Ties are fine:
    /// any of the equal-depth obstacles yields the same maximum.
    pub fn max_depth(&self) -> Option<f32> {
        self.obstacles
            .iter()
            .map(|obstacle| obstacle.position.z)
            .fold(None, |max, z| match max {
                Some(m) if m >= z => Some(m),
                _ => Some(z),
            })
    }
}
