use env_logger::Env;
use std::io::Write;

/// Diagnostics go to stderr as `[lunchy] message`. `RUST_LOG` wins over
/// `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format(|buf, record| writeln!(buf, "[lunchy] {}", record.args()))
        .init();
}
