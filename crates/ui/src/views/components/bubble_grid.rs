use dioxus::prelude::*;

use crate::vm::{BubbleId, OUTLINE_COLOR, OVAL_HEIGHT, OVAL_OUTLINE, QuestionRowVm};

/// One row per question: the number label, then an oval per option.
///
/// Each oval and its letter form a single click target reporting its
/// `BubbleId`.
#[component]
pub fn BubbleGrid(rows: Vec<QuestionRowVm>, on_select: Callback<BubbleId>) -> Element {
    rsx! {
        div { class: "omr-grid",
            for row in rows {
                div { key: "{row.question}", class: "omr-row",
                    span { class: "omr-question", "{row.label}" }
                    svg {
                        class: "omr-options",
                        width: "{row.canvas_width}",
                        height: "{OVAL_HEIGHT}",
                        view_box: "0 0 {row.canvas_width} {OVAL_HEIGHT}",
                        for bubble in row.bubbles {
                            g {
                                key: "{bubble.id.option}",
                                class: if bubble.selected { "omr-bubble selected" } else { "omr-bubble" },
                                "data-question": "{bubble.id.question}",
                                "data-option": "{bubble.id.option}",
                                onclick: move |_| on_select.call(bubble.id),
                                ellipse {
                                    cx: "{bubble.center_x()}",
                                    cy: "{bubble.center_y()}",
                                    rx: "{bubble.radius_x()}",
                                    ry: "{bubble.radius_y()}",
                                    fill: "{bubble.fill}",
                                    stroke: OUTLINE_COLOR,
                                    stroke_width: "{OVAL_OUTLINE}",
                                }
                                text {
                                    x: "{bubble.center_x()}",
                                    y: "{bubble.center_y()}",
                                    fill: "{bubble.text_color}",
                                    text_anchor: "middle",
                                    dominant_baseline: "central",
                                    class: "omr-bubble-label",
                                    "{bubble.id.option}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
