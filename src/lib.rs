pub mod adder;
pub mod config;
pub mod error;
pub mod log;

pub use adder::{Adder, format_sum};
pub use config::Config;
pub use error::{Error, Result};
pub use log::{TracingLog, WarnLog};
