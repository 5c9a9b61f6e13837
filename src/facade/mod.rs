//! Logging facade: configuration in, shareable logger out
//!
//! [`LoggerFacade::new`] composes output resolution, formatter selection and
//! level mapping into one [`Engine`](crate::core::Engine). Applications then
//! log through the [`MessageLogger`]/[`FieldLogger`]/[`Logger`] traits and,
//! where allowed, redirect output through [`Controller`].

pub mod config;
pub mod level;
pub mod logger;
pub mod nested;
pub mod output;
pub mod traits;

pub use config::Config;
pub use level::{map_level, Level};
pub use logger::{LoggerBuilder, LoggerFacade};
pub use nested::NestedLogger;
pub use output::{resolve_output, OutputResolver};
pub use traits::{Controller, FieldLogger, Logger, MessageLogger};
