#[tokio::main]
async fn main() {
    if let Err(err) = doc_evaluation_server::run().await {
        eprintln!("Fatal error running server: {err:#}");
        std::process::exit(1);
    }
}
