use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgba;
use crate::rendering::Drawable;
use crate::utils;

pub const INTERPOLATION_COEFFICIENT: f32 = 0.5;
pub const COMPARISON_DELTA: f32 = 0.1;

/// Randomly changes the color of a drawable over time.
/// Can also do a transition to a fixed color.
///
/// The mutator aliases the drawable's color storage instead of copying it:
/// it is the only writer of the cell, the renderer only reads it.
pub struct ColorMutator {
    available_colors: Vec<Rgba>,
    color: Rc<RefCell<Rgba>>,
    next_color: Rgba,
    should_continue: bool,
    rng: StdRng,
}

impl ColorMutator {
    /// Binds the mutator to `container`'s color and picks an initial random
    /// target from `available_colors`.
    ///
    /// Panics if `available_colors` is empty.
    pub fn new(container: &dyn Drawable, available_colors: Vec<Rgba>) -> Self {
        Self::with_rng(container, available_colors, StdRng::from_entropy())
    }

    /// Same as [`ColorMutator::new`] with a caller-supplied rng, so tests can
    /// seed the random target selection.
    pub fn with_rng(container: &dyn Drawable, available_colors: Vec<Rgba>, rng: StdRng) -> Self {
        assert!(
            !available_colors.is_empty(),
            "ColorMutator requires at least one candidate color"
        );
        let mut mutator = Self {
            available_colors,
            color: container.color(),
            next_color: Rgba::WHITE,
            should_continue: true,
            rng,
        };
        mutator.select_next_color();
        mutator
    }

    /// Slightly changes the container's color towards the next color.
    /// Once every channel is within [`COMPARISON_DELTA`] of the target and
    /// random selection is enabled, a new target is picked.
    pub fn mutate(&mut self, delta: f32) {
        let mut color = self.color.borrow_mut();
        color.lerp(self.next_color, INTERPOLATION_COEFFICIENT * delta);
        let is_the_right_color = color.approx_eq(&self.next_color, COMPARISON_DELTA);
        drop(color);

        if is_the_right_color && self.should_continue {
            self.select_next_color();
        }
    }

    /// Resets the color to white and resumes random selection.
    pub fn reset(&mut self) {
        *self.color.borrow_mut() = Rgba::WHITE;
        self.should_continue = true;
    }

    /// Makes `color` the next color and pauses all future transitions.
    pub fn set_fixed_color(&mut self, color: Rgba) {
        self.next_color = color;
        self.should_continue = false;
    }

    /// Keeps displaying random colors.
    pub fn unset_fixed_color(&mut self) {
        self.should_continue = true;
    }

    /// The color currently being transitioned to.
    pub fn next_color(&self) -> Rgba {
        self.next_color
    }

    fn select_next_color(&mut self) {
        if let Some(color) = utils::random_color(&mut self.rng, &self.available_colors) {
            self.next_color = color;
        }
    }
}
