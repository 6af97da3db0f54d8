//! Embassy async tasks
//!
//! The LCD task is the single consumer of the layer store; every other task
//! only draws on its own layer.

pub mod banner;
pub mod clock;
pub mod counter;
pub mod lcd;

pub use banner::banner_task;
pub use clock::clock_task;
pub use counter::counter_task;
pub use lcd::lcd_task;
