use srd_monsters::cli::run;
use srd_monsters::config::ExpandConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!("srd-monsters startup: tracing initialised");

    match run(ExpandConfig::default()).await {
        Ok(report) => {
            println!("Database now contains {} SRD monsters.", report.count);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("[ERROR] Monster expansion failed: {e:#}");
            std::process::exit(1);
        }
    }
}
