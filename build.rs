use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");

    // target/<profile>/ sits three levels above OUT_DIR
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    // Ship config.toml next to the executable
    let config_path = Path::new("config.toml");
    if config_path.exists() {
        fs::copy(config_path, target_dir.join("config.toml")).expect("failed to copy config.toml");
    }
}
