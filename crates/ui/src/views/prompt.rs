#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{PromptOutcome, prompt_label, submit_question_count};

/// Startup dialog asking how many questions the sheet has.
///
/// Bad input keeps the dialog open with a hint. Cancel exits the app.
#[component]
pub fn PromptView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.sheet_service();
    let max_questions = service.config().max_questions();
    let mut input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = use_callback(move |()| {
        match submit_question_count(&service, &input.read()) {
            PromptOutcome::Accepted(count) => {
                error.set(None);
                navigator.push(Route::Sheet {
                    count: count.value(),
                });
            }
            PromptOutcome::Rejected(message) => {
                error.set(Some(message));
            }
        }
    });

    let exit_ctx = ctx.clone();
    let on_cancel = use_callback(move |()| {
        tracing::info!("question count prompt cancelled");
        exit_ctx.request_exit();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PromptTestHandles>() {
                handles.register(on_submit, on_cancel, input);
            }
        }
    }

    rsx! {
        div { class: "prompt-overlay",
            div { class: "prompt-dialog", role: "dialog",
                h3 { class: "prompt-title", "Number of Questions" }
                label { class: "prompt-label", r#for: "question-count",
                    "{prompt_label(max_questions)}"
                }
                input {
                    id: "question-count",
                    class: "prompt-input",
                    r#type: "number",
                    min: "1",
                    max: "{max_questions}",
                    autofocus: true,
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            on_submit.call(());
                        }
                    },
                }
                if let Some(message) = error() {
                    p { class: "prompt-error", "{message}" }
                }
                div { class: "prompt-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_submit.call(()),
                        "OK"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PromptTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    cancel: Rc<RefCell<Option<Callback<()>>>>,
    input: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl PromptTestHandles {
    pub(crate) fn register(
        &self,
        submit: Callback<()>,
        cancel: Callback<()>,
        input: Signal<String>,
    ) {
        *self.submit.borrow_mut() = Some(submit);
        *self.cancel.borrow_mut() = Some(cancel);
        *self.input.borrow_mut() = Some(input);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("prompt submit registered")
    }

    pub(crate) fn cancel(&self) -> Callback<()> {
        (*self.cancel.borrow()).expect("prompt cancel registered")
    }

    pub(crate) fn input(&self) -> Signal<String> {
        (*self.input.borrow()).expect("prompt input registered")
    }
}
