pub mod aws;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod query;
pub mod render;
pub mod window;
