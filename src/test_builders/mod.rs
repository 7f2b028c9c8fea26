mod environment_builder;

pub use environment_builder::*;
