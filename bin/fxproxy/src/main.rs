#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    fxproxy::run().await
}
