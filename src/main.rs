//! Wiring & DI. Entry point: load config, bootstrap data sources, inject into
//! the dashboard service, run the UI. No business logic here.

use motor_desk::adapters::persistence::JsonFileSource;
use motor_desk::adapters::ui::tui::TuiInputPort;
use motor_desk::domain::{Company, Invoice, Job, Warranty};
use motor_desk::ports::{CompanySource, InputPort, InvoiceSource, JobSource, WarrantySource};
use motor_desk::shared::config::AppConfig;
use motor_desk::shared::logging::init_tracing;
use motor_desk::usecases::DashboardService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config could not be loaded, using defaults");
            AppConfig::default()
        }
    };

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    if !data_path.is_dir() {
        anyhow::bail!(
            "Data directory {} does not exist. Set MOTOR_DESK_DATA_DIR (env or .env) to the folder with companies.json, jobs.json, invoices.json and warranties.json",
            data_path.display()
        );
    }
    let data_dir_abs = data_path
        .canonicalize()
        .unwrap_or_else(|_| data_path.clone());
    info!(path = %data_dir_abs.display(), "data directory");

    let companies: Arc<CompanySource> = Arc::new(JsonFileSource::<Company>::in_dir(&data_path));
    let jobs: Arc<JobSource> = Arc::new(JsonFileSource::<Job>::in_dir(&data_path));
    let invoices: Arc<InvoiceSource> = Arc::new(JsonFileSource::<Invoice>::in_dir(&data_path));
    let warranties: Arc<WarrantySource> =
        Arc::new(JsonFileSource::<Warranty>::in_dir(&data_path));

    let windows = cfg.alert_windows();
    info!(
        due_days = windows.due_days,
        warranty_days = windows.warranty_days,
        "alert windows"
    );
    let service = Arc::new(
        DashboardService::new(companies, jobs, invoices, warranties)
            .with_limits(cfg.view_limits())
            .with_windows(windows),
    );

    motor_desk::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(service, cfg.current_user_or_default()));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
