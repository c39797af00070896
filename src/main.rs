use anyhow::Result;
use std::env;
use timeleft::cmdline::parse_cmdline;
use timeleft::main_body::main_body;

fn main() -> Result<()> {
    // the report goes to stdout, log messages to stderr
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    let program_args = parse_cmdline()?;
    main_body(program_args)?;
    Ok(())
}
