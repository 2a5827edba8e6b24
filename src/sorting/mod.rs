pub mod distance;
pub mod path_builder;
pub mod resolver;
pub mod sanitize;
pub mod sorter;
