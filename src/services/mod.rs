pub mod locator;
pub mod runner;

pub use locator::{locate_pashua, PashuaLocator};
pub use runner::{
    create_runner, parse_output, run_pashua, run_window, DialogRunner, DryRunRunner, PashuaRunner,
};
