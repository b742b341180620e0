use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    charla::logging::init();
    charla::run().await
}
