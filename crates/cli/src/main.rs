fn main() {
    if let Err(e) = treescope_cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
