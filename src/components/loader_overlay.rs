/// Full-page loading overlay shared by every page through context.
use leptos::*;

/// Handle to the overlay. `None` hides it; `Some(text)` shows it with that caption.
#[derive(Clone, Copy)]
pub struct LoaderState {
    text: RwSignal<Option<String>>,
}

impl LoaderState {
    pub fn new() -> Self {
        Self {
            text: create_rw_signal(None),
        }
    }

    pub fn show(&self, text: &str) {
        self.text.set(Some(text.to_string()));
    }

    pub fn hide(&self) {
        self.text.set(None);
    }

    pub fn is_visible(&self) -> bool {
        self.text.with(Option::is_some)
    }
}

impl Default for LoaderState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LoaderOverlay() -> impl IntoView {
    let loader = expect_context::<LoaderState>();

    view! {
        <Show when=move || loader.is_visible()>
            <div id="loader" class="loader-overlay">
                <div class="spinner"></div>
                <p>{move || loader.text.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
