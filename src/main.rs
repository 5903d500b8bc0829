mod cli;
mod commands;
mod demo;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("application error: {err}");
        let code = if err.is_rejection() { 1 } else { 2 };
        std::process::exit(code);
    }
}
