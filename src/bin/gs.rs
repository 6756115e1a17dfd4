fn main() {
    if let Err(err) = gs_scaffold::cli::run_cli() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
