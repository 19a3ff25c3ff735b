fn main() {
    if let Err(err) = callq_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
