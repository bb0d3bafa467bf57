use clap::Parser;
use lathe_chess::args::Args;
use lathe_chess::{run, ViewerConfig, VERSION};

fn main() {
    env_logger::init();

    let config = ViewerConfig::from(Args::parse());
    log::info!(
        "Lathe Chess {} ({} slices, assets in {})",
        VERSION,
        config.slice_count,
        config.asset_dir.display()
    );

    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
