use crate::dialog::{ResultMap, Window};
use crate::encoder::encode_window;
use crate::error::Result;
use std::path::PathBuf;

/// Trait for anything that can show a Pashua dialog and report its result
pub trait DialogRunner {
    /// Run the dialog described by already encoded config text
    fn run(&self, config_text: &str) -> Result<ResultMap>;

    /// Validate component keys, encode the window and run it
    fn run_window(&self, window: &Window) -> Result<ResultMap> {
        window.validate()?;
        self.run(&encode_window(window))
    }
}

/// Factory function to create an appropriate runner based on the dry_run flag
pub fn create_runner(pashua_path: Option<PathBuf>, dry_run: bool) -> Box<dyn DialogRunner + Send> {
    if dry_run {
        Box::new(super::dry_run::DryRunRunner::new())
    } else {
        Box::new(super::pashua_runner::PashuaRunner::new(pashua_path))
    }
}
