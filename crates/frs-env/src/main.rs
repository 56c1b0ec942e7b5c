use frs_config::{BackendSettings, API_BASE, API_BASE_ENV, BUILD_API_BASE};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    frs_logging::init();

    info!(
        service = "frs-env",
        version = env!("CARGO_PKG_VERSION"),
        "Resolving File Redaction System settings"
    );

    let backend = match BackendSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to resolve backend settings: {}", e);
            return Err(e.into());
        }
    };

    println!("API_BASE={}", API_BASE.as_str());
    println!("BUILD_API_BASE={}", BUILD_API_BASE);
    println!("BIND_ADDR={}", backend.bind_addr());
    println!("DATABASE_PATH={}", backend.database_path);
    println!("UPLOAD_DIR={}", backend.upload_dir);

    info!(override_var = API_BASE_ENV, "Settings resolved");
    Ok(())
}
