use crate::pages::Notice;
use leptos::*;

/// Inline success/error message. Renders nothing until there is a notice.
#[component]
pub fn MessageBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! { <div class=notice.css_class()>{notice.text}</div> }
        })
    }
}
