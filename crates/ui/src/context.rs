use std::sync::Arc;

use services::SheetService;

pub trait UiApp: Send + Sync {
    fn sheet_service(&self) -> Arc<SheetService>;

    /// Close the application. Used when the startup prompt is cancelled.
    fn request_exit(&self);
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    sheet_service: Arc<SheetService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            sheet_service: app.sheet_service(),
        }
    }

    #[must_use]
    pub fn sheet_service(&self) -> Arc<SheetService> {
        Arc::clone(&self.sheet_service)
    }

    pub fn request_exit(&self) {
        self.app.request_exit();
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
