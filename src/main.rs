use color_pulse::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use color_pulse::{logic, rendering, GameState};

fn main() {
    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .title("Color Pulse")
        .build();
    rl.set_target_fps(60);

    let mut state = GameState::default();
    logic::init(&mut state);

    while !rl.window_should_close() {
        let delta = rl.get_frame_time();
        logic::update(&mut state, delta);
        rendering::render(&state, &mut rl, &thread);
    }
}
