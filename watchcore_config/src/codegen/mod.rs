use anyhow::Result;
use std::{fs::OpenOptions, io::Write, path::Path};

use crate::Configuration;

mod constants;

/// Name of the file `watchcore` includes from its build output directory.
pub const CONFIGURATION_FILENAME: &str = "configuration.rs";

/// Renders every generated module for `configuration` into `directory`.
pub fn generate_modules<P: AsRef<Path>>(directory: P, configuration: &Configuration) -> Result<()> {
    configuration.validate()?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(directory.as_ref().join(CONFIGURATION_FILENAME))?;
    let code = constants::generate_constants(configuration);
    file.write_all(format!("{}", code).as_bytes())?;
    Ok(())
}
