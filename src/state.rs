use raylib::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::color::Rgba;
use crate::mutator::ColorMutator;
use crate::rendering::Drawable;

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vector3,
    pub size: Vector3,
    // Shared with the player's ColorMutator, which is its only writer.
    pub color: Rc<RefCell<Rgba>>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vector3 { x: 0.0, y: 0.5, z: 0.0 },
            size: Vector3 { x: 1.0, y: 1.0, z: 1.0 },
            color: Rc::new(RefCell::new(Rgba::WHITE)),
        }
    }
}

impl Drawable for PlayerState {
    fn color(&self) -> Rc<RefCell<Rgba>> {
        Rc::clone(&self.color)
    }
}

pub struct GameState {
    pub players: HashMap<i32, PlayerState>,
    pub mutators: HashMap<i32, ColorMutator>,
    pub camera: Camera3D,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: HashMap::new(),
            mutators: HashMap::new(),
            camera: Camera3D::perspective(
                Vector3::new(4.0, 3.0, 4.0),
                Vector3::new(0.0, 0.5, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                45.0,
            ),
        }
    }
}
