use anyhow::Result;
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};
use watchcore_config::{codegen::generate_modules, Configuration};

const DEFAULT_CONFIG_FILENAME: &str = "default.ron";

fn main() -> Result<()> {
    process_configuration_file()?;
    Ok(())
}

fn process_configuration_file() -> Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let default_path = manifest_dir
        .join("watchcore_config")
        .join("sample_configurations")
        .join(DEFAULT_CONFIG_FILENAME);

    println!("cargo:rerun-if-env-changed=WATCHCORE_CONFIG");
    println!("cargo:rerun-if-changed={}", default_path.display());

    let filename = match env::var("WATCHCORE_CONFIG") {
        Ok(filename) => {
            println!("cargo:rerun-if-changed={}", filename);
            PathBuf::from(filename)
        }
        Err(_) => default_path,
    };

    let file = File::open(filename)?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    let configuration: Configuration = ron::from_str(&contents)?;
    generate_modules(env::var("OUT_DIR")?, &configuration)?;

    Ok(())
}
