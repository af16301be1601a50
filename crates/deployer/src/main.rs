use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize("info,deployer=debug", tracing::Level::ERROR.into());
    observe::panic_hook::install();
    tracing::info!("running deployer with validated arguments:\n{}", args);
    deployer::main(args).await
}
