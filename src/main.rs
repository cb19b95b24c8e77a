fn main() {
    if let Err(err) = scheme_rollup::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
