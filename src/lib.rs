pub mod logging;
pub mod tools;
