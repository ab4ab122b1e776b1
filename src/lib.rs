pub mod cards;
pub mod cluster;
pub mod combinatorics;
pub mod error;
pub mod index;
pub mod probability;

pub use error::Error;
pub use error::Result;

// kmeans clustering parameters
pub use cluster::K as KMEANS_CLUSTER_COUNT;
pub use cluster::T as KMEANS_TRAINING_ITERATIONS;

/// Default on-disk path for the probability table, overridable via the
/// `PROB_TABLE_PATH` environment variable.
pub const PROB_TABLE_DEFAULT_PATH: &str = "TTP0.bin";
/// Default on-disk path for the hand-cluster grid, overridable via the
/// `HAND_CLUSTER_PATH` environment variable.
pub const HAND_CLUSTER_DEFAULT_PATH: &str = "HCL0.bin";

pub fn prob_table_path() -> std::path::PathBuf {
    std::env::var("PROB_TABLE_PATH")
        .unwrap_or_else(|_| PROB_TABLE_DEFAULT_PATH.to_string())
        .into()
}

pub fn hand_cluster_path() -> std::path::PathBuf {
    std::env::var("HAND_CLUSTER_PATH")
        .unwrap_or_else(|_| HAND_CLUSTER_DEFAULT_PATH.to_string())
        .into()
}

/// progress bar for long-running builds (native/CLI use only)
pub fn progress(n: usize) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_secs(1);
    let style = "{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan} {pos}/{len}";
    let style = indicatif::ProgressStyle::with_template(style).unwrap();
    let progress = indicatif::ProgressBar::new(n as u64);
    progress.set_style(style);
    progress.enable_steady_tick(tick);
    progress
}

/// wires a terminal logger at Info and a timestamped file logger at Debug
/// under `logs/`. CLI-only; library code never calls this itself.
#[cfg(feature = "cli")]
pub fn init_logging() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
