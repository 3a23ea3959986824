use raylib::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgba;
use crate::state::GameState;

/// Anything renderable that exposes a mutable RGBA color.
///
/// The returned handle aliases the drawable's own storage; writing through it
/// changes what gets rendered next frame.
pub trait Drawable {
    fn color(&self) -> Rc<RefCell<Rgba>>;
}

pub fn render(state: &GameState, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let mut d = rl.begin_drawing(thread);

    d.clear_background(Color::BLACK);

    {
        let mut d3 = d.begin_mode3D(state.camera);
        d3.draw_grid(10, 1.0);

        for player in state.players.values() {
            let color: Color = (*player.color.borrow()).into();
            d3.draw_cube(
                player.position,
                player.size.x,
                player.size.y,
                player.size.z,
                color,
            );
            d3.draw_cube_wires(
                player.position,
                player.size.x,
                player.size.y,
                player.size.z,
                Color::DARKGRAY,
            );
        }
    }

    // Draw the current transition targets as swatches in the top right
    let mut x_offset = d.get_screen_width() - 40;
    for mutator in state.mutators.values() {
        let target: Color = mutator.next_color().into();
        d.draw_rectangle(x_offset, 10, 30, 30, target);
        d.draw_rectangle_lines(x_offset, 10, 30, 30, Color::WHITE);
        x_offset -= 40;
    }

    let fps = d.get_fps();
    d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::GREEN);
    d.draw_text("SPACE (hold): flash | R: reset", 10, 40, 20, Color::GRAY);
}
