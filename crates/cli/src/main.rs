fn main() {
    if let Err(e) = deptree_cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
