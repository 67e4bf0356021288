// Library exports for testing and potential library use

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod wordlist;
