use std::env;
use std::path::PathBuf;

fn main() {
  let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

  let config = cbindgen::Config::from_file(PathBuf::from(&crate_dir).join("cbindgen.toml"))
    .expect("failed to read cbindgen.toml");

  let output_dir = PathBuf::from(&crate_dir).join("include");
  std::fs::create_dir_all(&output_dir).expect("failed to create include/ directory");

  cbindgen::Builder::new()
    .with_crate(&crate_dir)
    .with_config(config)
    .generate()
    .expect("cbindgen failed to generate bindings")
    .write_to_file(output_dir.join("rarena.h"));
}
