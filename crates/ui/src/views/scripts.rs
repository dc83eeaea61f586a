use dioxus::document::eval;

const SCROLL_BY_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (el) { el.scrollBy(0, {delta}); }
"#;

fn scroll_by_script(element_id: &str, delta: f64) -> String {
    SCROLL_BY_SCRIPT_TEMPLATE
        .replace("{element_id}", element_id)
        .replace("{delta}", &delta.to_string())
}

/// Scroll an element vertically by `delta` pixels.
pub async fn scroll_by(element_id: &str, delta: f64) {
    let script = scroll_by_script(element_id, delta);
    let _ = eval(&script).await;
}
