use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use omr_core::model::SheetConfig;
use services::SheetService;
use storage::repository::InMemoryRepository;

use crate::context::{UiApp, build_app_context};
use crate::views::prompt::PromptTestHandles;
use crate::views::sheet::SheetTestHandles;
use crate::views::{PromptView, SheetView};

struct TestApp {
    sheet_service: Arc<SheetService>,
    exit_requested: Arc<AtomicBool>,
}

impl UiApp for TestApp {
    fn sheet_service(&self) -> Arc<SheetService> {
        Arc::clone(&self.sheet_service)
    }

    fn request_exit(&self) {
        self.exit_requested.store(true, Ordering::Release);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Prompt,
    Sheet(u16),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    prompt_handles: PromptTestHandles,
    sheet_handles: SheetTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.prompt_handles.clone());
    use_context_provider(|| props.sheet_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Prompt => rsx! { PromptView {} },
        ViewKind::Sheet(count) => rsx! { SheetView { count } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub exports: InMemoryRepository,
    pub exit_requested: Arc<AtomicBool>,
    pub prompt_handles: PromptTestHandles,
    pub sheet_handles: SheetTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Runs `callback` the way an event handler would, then settles the DOM.
    pub fn fire<T: 'static>(&mut self, callback: Callback<T>, arg: T) {
        self.dom.in_runtime(|| callback.call(arg));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let exports = InMemoryRepository::new();
    let sheet_service = Arc::new(SheetService::new(
        SheetConfig::default(),
        Arc::new(exports.clone()),
    ));
    let exit_requested = Arc::new(AtomicBool::new(false));
    let app = Arc::new(TestApp {
        sheet_service,
        exit_requested: Arc::clone(&exit_requested),
    });

    let prompt_handles = PromptTestHandles::default();
    let sheet_handles = SheetTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            prompt_handles: prompt_handles.clone(),
            sheet_handles: sheet_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        exports,
        exit_requested,
        prompt_handles,
        sheet_handles,
    }
}
