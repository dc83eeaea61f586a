use dioxus::prelude::*;

use crate::views::SaveState;

#[component]
pub fn SaveNotice(state: SaveState, on_close: Callback<()>) -> Element {
    let (title, body) = match &state {
        SaveState::Saved { location } => ("Saved", format!("Responses saved to {location}")),
        SaveState::Failed(err) => ("Save failed", err.message().to_string()),
        SaveState::Idle | SaveState::Saving => return rsx! {},
    };

    rsx! {
        div {
            class: "sheet-modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "sheet-modal-title", "{title}" }
                p { class: "sheet-modal-body", "{body}" }
                div { class: "sheet-modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
