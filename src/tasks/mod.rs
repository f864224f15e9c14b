//! Background tasks module
//! 
//! This module contains the tasks that run alongside the room session: the
//! local countdown and the terminal renderer.

pub mod countdown;
pub mod renderer;

// Re-export main functions
pub use countdown::countdown_task;
pub use renderer::render_task;
