pub mod actions; // Call / directions / copy-address with fallbacks
pub mod analysis; // Keyword classifier + results screen
pub mod catalog; // Static doctors, medicines, remedies
#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod core_state;
pub mod intake; // Form validation + urgent advisory
pub mod models;
pub mod navigation; // View router

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the
/// built-in default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;

    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    tauri::Builder::default()
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_app_info,
            commands::intake::get_form_options,
            commands::intake::submit_intake,
            commands::navigation::get_current_view,
            commands::navigation::navigate,
            commands::navigation::start_over,
            commands::navigation::get_analysis,
            commands::catalog::list_doctors,
            commands::catalog::list_medicines,
            commands::catalog::list_home_remedies,
            commands::actions::call_doctor,
            commands::actions::get_directions,
            commands::actions::copy_doctor_address,
        ])
        .run(tauri::generate_context!())
        .expect("error while running RuralHealth");
}
