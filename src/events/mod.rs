pub mod nav;
pub mod orientation;
pub mod pointer;

pub use nav::wire_nav_buttons;
pub use orientation::wire_device_orientation;
pub use pointer::{wire_pointer_handlers, PointerWiring};
