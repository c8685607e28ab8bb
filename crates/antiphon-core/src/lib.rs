pub mod config;
pub mod logging;

pub mod archive;
pub mod error;
pub mod fetch;
pub mod gabc;
pub mod output;
pub mod pipeline;
