fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(internal::log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    match internal::run() {
        Ok(rendering) => println!("{}", rendering),
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1)
        }
    }
}
