use std::path::Path;
extern crate rustsourcebundler;
use rustsourcebundler::Bundler;

// Produces a single-file submission (src/bin/merged.rs) out of the bot binary and the library.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/bin/main.rs");
    println!("cargo:rerun-if-changed=src/lib.rs");
    for module in ["coord", "grid", "world", "search", "protocol", "strategy", "driver", "error"] {
        println!("cargo:rerun-if-changed=src/{module}.rs");
    }

    let mut bundler = Bundler::new(
        Path::new("src/bin/main.rs"),
        Path::new("src/bin/merged.rs"),
    );
    bundler.crate_name("kutulu");
    bundler.run();
    Ok(())
}
