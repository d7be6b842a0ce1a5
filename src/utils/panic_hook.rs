use leptos::logging::log;
use std::panic;

/// Sends panics to the browser console and tags them with the route that was
/// showing when they happened.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let console_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        console_hook(panic_info);

        let route = super::browser::current_path().unwrap_or_else(|| "<unknown>".to_string());
        log!("[PANIC] while rendering {}", route);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            ""
        };
        // Delayed callbacks (reloads, redirects) may outlive the page that
        // scheduled them.
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] a signal of {} was used after the page was left", route);
        }
    }));
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] installed");
}
