pub mod cell;
pub mod renderer;

pub use cell::CellRenderer;
pub use renderer::RsvpRenderer;
