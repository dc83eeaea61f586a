use dioxus::prelude::*;

#[component]
pub fn AnswerPreview(text: String) -> Element {
    rsx! {
        section { class: "answer-panel",
            h3 { class: "answer-panel-title", "Your Selected Answers:" }
            pre { class: "answer-text", "{text}" }
        }
    }
}
