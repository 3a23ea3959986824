use raylib::prelude::*;

use crate::config::{FLASH_COLOR, PALETTE};
use crate::mutator::ColorMutator;
use crate::state::{GameState, PlayerState};

pub fn init(state: &mut GameState) {
    let player = PlayerState::default();
    let mutator = ColorMutator::new(&player, PALETTE.to_vec());
    state.players.insert(0, player);
    state.mutators.insert(0, mutator);
}

pub fn update(state: &mut GameState, delta: f32) {
    // Hold SPACE to flash red, release to resume the random cycle
    unsafe {
        if ffi::IsKeyPressed(KeyboardKey::KEY_SPACE as i32) {
            for mutator in state.mutators.values_mut() {
                mutator.set_fixed_color(FLASH_COLOR);
            }
        }
        if ffi::IsKeyReleased(KeyboardKey::KEY_SPACE as i32) {
            for mutator in state.mutators.values_mut() {
                mutator.unset_fixed_color();
            }
        }
        if ffi::IsKeyPressed(KeyboardKey::KEY_R as i32) {
            for mutator in state.mutators.values_mut() {
                mutator.reset();
            }
        }
    }

    for mutator in state.mutators.values_mut() {
        mutator.mutate(delta);
    }
}
