use backend_api::{run_server, FileAnalysisRepository};
use std::sync::Arc;
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments or environment variables (with sane defaults)
    let analysis_path_raw =
        env::var("ANALYSIS_PATH").unwrap_or_else(|_| "analysis/analysis.json".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let analysis_path = PathBuf::from(&analysis_path_raw);

    println!("Sensitivity Analysis API Server");
    println!("===============================");
    println!("Analysis path: {}", analysis_path.display());
    println!("Listening on: {}:{}", host, port);
    println!("Environment overrides: ANALYSIS_PATH='{}'", analysis_path_raw);
    println!();

    // Pre-flight check; POST /api/analysis works either way
    if !analysis_path.exists() {
        eprintln!(
            "[WARN] analysis.json not found at: {}",
            analysis_path.display()
        );
        eprintln!("       Continuing; GET /api/analysis will 404 until it is generated.");
    }

    // Create the repository
    let repo = Arc::new(FileAnalysisRepository::new(analysis_path));

    run_server(repo, &host, port).await
}
