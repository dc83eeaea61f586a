#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use dioxus_router::Link;
use omr_core::model::QuestionCount;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{AnswerPreview, BubbleGrid, SaveNotice};
use crate::views::{SaveState, ViewError, scripts};
use crate::vm::{DragScroll, SheetIntent, SheetVm};

const SCROLL_ID: &str = "sheet-scroll";

#[component]
pub fn SheetView(count: u16) -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.sheet_service().question_count(u32::from(count)) {
        Ok(count) => rsx! {
            SheetScreen { count }
        },
        Err(err) => rsx! {
            div { class: "page",
                p { class: "sheet-error", "{err}" }
                Link { to: Route::Prompt {}, "Back" }
            }
        },
    }
}

#[component]
fn SheetScreen(count: QuestionCount) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.sheet_service();
    let mut vm = use_signal({
        let service = service.clone();
        move || SheetVm::new(service.start_session(count))
    });
    let mut save_state = use_signal(|| SaveState::Idle);
    let mut drag = use_signal(DragScroll::default);

    let dispatch = use_callback(move |intent: SheetIntent| {
        // Rejections are already logged by the view model.
        let _ = vm.write().apply(intent);
    });

    let on_save = use_callback(move |()| {
        if save_state.read().is_saving() {
            return;
        }
        let session = vm.read().session().clone();
        let service = service.clone();
        save_state.set(SaveState::Saving);
        spawn(async move {
            let next = match service.save(&session).await {
                Ok(receipt) => SaveState::Saved {
                    location: receipt.location.to_string(),
                },
                Err(_) => SaveState::Failed(ViewError::SaveFailed),
            };
            save_state.set(next);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SheetTestHandles>() {
                handles.register(dispatch, on_save);
            }
        }
    }

    let (header, window_title, rows, preview, preview_text) = {
        let vm = vm.read();
        (
            vm.header(),
            vm.window_title(),
            vm.rows(),
            vm.preview(),
            vm.preview_text(),
        )
    };
    let saving = save_state.read().is_saving();
    let scroll_class = if drag.read().is_dragging() {
        "sheet-scroll dragging"
    } else {
        "sheet-scroll"
    };

    rsx! {
        document::Title { "{window_title}" }
        div { class: "page sheet-page",
            h2 { class: "sheet-title", "{header}" }
            div {
                id: SCROLL_ID,
                class: scroll_class,
                onmousedown: move |evt| {
                    let primary = evt.trigger_button() == Some(MouseButton::Primary);
                    drag.write().press(evt.client_coordinates().y, primary);
                },
                onmousemove: move |evt| {
                    let delta = drag.write().drag_to(evt.client_coordinates().y);
                    if let Some(delta) = delta {
                        spawn(async move {
                            scripts::scroll_by(SCROLL_ID, delta).await;
                        });
                    }
                },
                onmouseup: move |_| drag.write().release(),
                onmouseleave: move |_| drag.write().release(),
                BubbleGrid {
                    rows,
                    on_select: move |id| dispatch.call(SheetIntent::Select(id)),
                }
            }
            button {
                class: "btn btn-primary sheet-toggle",
                r#type: "button",
                onclick: move |_| dispatch.call(SheetIntent::TogglePreview),
                "{preview.toggle_label()}"
            }
            if preview.is_shown() {
                AnswerPreview { text: preview_text }
            }
            div { class: "sheet-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    "💾 Save Responses"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| dispatch.call(SheetIntent::Reset),
                    "🔄 Reset All"
                }
            }
            SaveNotice {
                state: save_state(),
                on_close: move |_| save_state.set(SaveState::Idle),
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SheetTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SheetIntent>>>>,
    save: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl SheetTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SheetIntent>, save: Callback<()>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.save.borrow_mut() = Some(save);
    }

    pub(crate) fn dispatch(&self) -> Callback<SheetIntent> {
        (*self.dispatch.borrow()).expect("sheet dispatch registered")
    }

    pub(crate) fn save(&self) -> Callback<()> {
        (*self.save.borrow()).expect("sheet save registered")
    }
}
