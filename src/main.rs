use taskmaster::commands::Cli;
use taskmaster::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Storage diagnostics are warnings and errors; everything else is opt-in.
    let filter = if is_debug_mode() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskmaster=debug"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(is_debug_mode()).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu().await
}
