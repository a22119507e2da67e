//! Exponential easing toward a moving target.
//!
//! Every eased quantity in the backdrop follows the same rule,
//! `current += (target - current) * factor`, applied once per frame. With a
//! factor in `(0, 1]` a step never overshoots and the remaining distance
//! shrinks by `(1 - factor)` per frame.

use glam::Vec2;

/// Values that can be moved a fraction of the way toward another value.
pub trait Ease: Copy {
    fn ease_toward(self, target: Self, factor: f32) -> Self;
}

impl Ease for f32 {
    #[inline]
    fn ease_toward(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

impl Ease for Vec2 {
    #[inline]
    fn ease_toward(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

/// A value that trails its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eased<T> {
    pub current: T,
    pub target: T,
}

impl<T: Ease> Eased<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Advance one frame and return the new current value.
    pub fn step(&mut self, factor: f32) -> T {
        self.current = self.current.ease_toward(self.target, factor);
        self.current
    }
}
