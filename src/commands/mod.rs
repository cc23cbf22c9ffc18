pub mod css;
pub mod environment;
