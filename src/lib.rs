//! Биндинг к Pashua (<https://www.bluem.net/en/projects/pashua/>).
//!
//! Окно описывается структурой [`Window`] с элементами [`Component`],
//! кодируется в построчный конфиг ([`encode_window`]), Pashua запускается
//! как дочерний процесс ([`run_pashua`] / [`run_window`]), а её stdout
//! разбирается в [`ResultMap`].

pub mod config;
pub mod dialog;
pub mod encoder;
pub mod error;
pub mod services;
pub mod utils;

pub use dialog::{Component, ResultMap, Window};
pub use encoder::encode_window;
pub use error::{PashuaError, Result};
pub use services::{
    create_runner, locate_pashua, parse_output, run_pashua, run_window, DialogRunner,
};
