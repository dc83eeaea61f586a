use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use omr_core::model::{SheetConfig, SheetConfigDraft};
use services::SheetService;
use storage::repository::Storage;
use ui::{App, UiApp, WINDOW_TITLE, build_app_context};

const WINDOW_WIDTH: f64 = 300.0;
const WINDOW_HEIGHT: f64 = 750.0;

struct DesktopApp {
    sheet_service: Arc<SheetService>,
}

impl UiApp for DesktopApp {
    fn sheet_service(&self) -> Arc<SheetService> {
        Arc::clone(&self.sheet_service)
    }

    fn request_exit(&self) {
        tracing::info!("exiting without writing responses");
        dioxus::desktop::window().close();
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn desktop_config() -> DesktopConfig {
    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true)
            .with_always_on_top(true),
    )
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // No flags or environment knobs: the defaults are the configuration.
    let config: SheetConfig = SheetConfigDraft::new().validate()?;
    tracing::info!(
        output = %config.output_file().display(),
        max_questions = config.max_questions(),
        "starting OMR sheet"
    );

    let storage = Storage::file(config.output_file());
    let sheet_service = Arc::new(SheetService::new(config, Arc::clone(&storage.exports)));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { sheet_service });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_config())
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
