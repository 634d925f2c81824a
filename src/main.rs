fn main() {
    if let Err(e) = release_buckets::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
