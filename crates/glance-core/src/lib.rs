pub mod config;
pub mod consts;
pub mod detect;
pub mod error;
pub mod geometry;
pub mod io;
pub mod oracle;
pub mod overlay;
pub mod raster;
pub mod viewport;
