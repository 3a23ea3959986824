use crate::color::Rgba;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

pub const FLASH_COLOR: Rgba = Rgba::new(0.9, 0.16, 0.22, 1.0); // Hit-flash red

// Predefined list of candidate colors
pub const PALETTE: [Rgba; 5] = [
    Rgba::new(0.17, 0.36, 0.22, 1.0), // #2C5D37
    Rgba::new(0.89, 0.77, 0.08, 1.0), // #E3C515
    Rgba::new(0.93, 0.32, 0.69, 1.0), // #EE51B1
    Rgba::new(0.65, 0.61, 0.83, 1.0), // #A59CD3
    Rgba::new(0.29, 0.18, 0.62, 1.0), // #4B2D9F
];
