//! Bootstrap and front ends for the maze engine.
//!
//! ```text
//! Args + FileConfig -> Settings -> build_engine() -> session::run(engine, presenter)
//! ```

pub mod args;
pub mod bootstrap;
pub mod config;
pub mod present;
pub mod session;
