use matrix_sssp::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::default();

    // Parse command line arguments
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }
    if let Ok(host) = env::var("SSSP_HOST") {
        config.host = host;
    }

    println!("🔧 Starting Matrix SSSP Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}:{}", config.host, config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!("   ⏰ Session timeout: {} minutes", config.session_timeout_minutes);
    println!();

    // Start the server
    start_server(config).await?;

    Ok(())
}
