#[tokio::main]
async fn main() -> anyhow::Result<()> {
    promptdoc_server::start().await
}
