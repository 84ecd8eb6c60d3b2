#[tokio::main]
async fn main() -> std::io::Result<()> {
    astro_blaster::run_with_config().await
}
