use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    bible_cli::main_entry().await
}
