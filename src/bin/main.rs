extern crate kutulu;

use std::io;

use env_logger::Env;
use kutulu::driver::run;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but commands.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        log::error!("{err}");
        return Err(err.into());
    }
    Ok(())
}
