pub mod view;

pub use view::render_reader;
