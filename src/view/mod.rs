//! View layers consuming the display model

pub mod terminal;
