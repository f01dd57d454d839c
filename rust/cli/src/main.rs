use std::io;

fn main() {
    // a subscriber installed by an embedding process wins
    let _ = showdown_cli::logging::init_logging();

    let code = showdown_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
