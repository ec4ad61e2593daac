pub mod bitmode;
pub mod cli;
pub mod convert;
pub mod error;
pub mod header;
pub mod pack;
pub mod palette;
pub mod quantize;
