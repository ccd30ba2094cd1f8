#[tokio::main]
async fn main() {
    if let Err(err) = crewmatch_api::run().await {
        eprintln!("crewmatch-api: {err}");
        std::process::exit(1);
    }
}
