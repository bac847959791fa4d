pub mod config;
pub mod detect;
pub mod edge;
pub mod info;
pub mod map;
pub mod scan;
pub mod select;
