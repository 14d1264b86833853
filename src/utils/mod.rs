pub mod string;

pub use string::remove_color_tags;
