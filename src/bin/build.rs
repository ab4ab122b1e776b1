//! Build entry point: produces `TTP0.bin` and/or `HCL0.bin` from scratch.
//!
//! The probability table and hand-cluster abstraction are the only
//! artifacts a downstream CFR trainer needs; this binary is a thin driver
//! around the two builders, nothing more.
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about = "Builds the probability table and hand-cluster abstraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and save the completion-probability table.
    Probabilities,
    /// Build and save the hand-cluster abstraction. Builds the probability
    /// table first if no artifact is present at `PROB_TABLE_PATH`.
    Clusters,
    /// Build and save both artifacts, in dependency order.
    All,
}

fn build_probabilities() -> thai_poker::probability::ProbabilityTable {
    let path = thai_poker::prob_table_path();
    match thai_poker::probability::ProbabilityTable::load(&path) {
        Ok(table) => {
            log::info!("reusing existing probability table at {}", path.display());
            table
        }
        Err(e) => {
            log::info!("no usable probability table at {} ({}), building", path.display(), e);
            let table = thai_poker::probability::ProbabilityTable::build();
            table.save(&path).expect("save probability table");
            table
        }
    }
}

fn build_clusters() {
    let prob_path = thai_poker::prob_table_path();
    let table = build_probabilities();
    thai_poker::probability::set_table(table);
    let _ = prob_path;

    let cluster_path = thai_poker::hand_cluster_path();
    let clusters = thai_poker::cluster::HandCluster::build();
    clusters.save(&cluster_path).expect("save hand clusters");
}

fn main() {
    thai_poker::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Probabilities => {
            let table = build_probabilities();
            table.save(thai_poker::prob_table_path()).expect("save probability table");
        }
        Command::Clusters => build_clusters(),
        Command::All => build_clusters(),
    }
}
