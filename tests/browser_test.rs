#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use tooldeck::api::{LocalTokenStore, TokenStorage, TOKEN_KEY};
use tooldeck::components::reviews_list::ReviewsList;
use tooldeck::models::{NewUser, Review};
use tooldeck::pages::auth::RegistrationForm;
use tooldeck::search::Debouncer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available")
}

#[wasm_bindgen_test]
fn token_lives_in_local_storage() {
    let store = LocalTokenStore;
    store.remove();
    assert!(!store.has_token());

    store.set("abc").unwrap();
    assert_eq!(
        local_storage().get_item(TOKEN_KEY).unwrap().as_deref(),
        Some("abc")
    );
    assert_eq!(store.get().as_deref(), Some("abc"));

    store.remove();
    assert_eq!(store.get(), None);
}

#[wasm_bindgen_test]
async fn debouncer_only_runs_the_last_action() {
    let debouncer = Debouncer::new(30);
    let fired = Rc::new(Cell::new(0u32));

    for value in 1..=3 {
        let fired = fired.clone();
        debouncer.schedule(move || fired.set(value));
    }
    assert_eq!(fired.get(), 0);

    TimeoutFuture::new(80).await;
    assert_eq!(fired.get(), 3);
}

#[wasm_bindgen_test]
async fn cancelled_action_never_runs() {
    let debouncer = Debouncer::new(20);
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();

    debouncer.schedule(move || flag.set(true));
    debouncer.cancel();

    TimeoutFuture::new(60).await;
    assert!(!fired.get());
}

fn query<T: JsCast>(selector: &str) -> T {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<T>().ok())
        .unwrap_or_else(|| panic!("{selector} not rendered"))
}

#[wasm_bindgen_test]
async fn rebuilt_registration_form_shows_the_pending_values() {
    let user = create_rw_signal(NewUser {
        username: "sam".into(),
        first_name: "Sam".into(),
        role: "admin".into(),
        ..NewUser::default()
    });

    mount_to_body(move || view! { <RegistrationForm user=user on_submit=Callback::new(|()| ())/> });
    TimeoutFuture::new(0).await;

    let role: web_sys::HtmlSelectElement = query("#registerForm select[name=role]");
    let first_name: web_sys::HtmlInputElement = query("#registerForm input[name=first_name]");
    let username: web_sys::HtmlInputElement = query("#registerForm input[name=username]");
    assert_eq!(role.value(), "admin");
    assert_eq!(first_name.value(), "Sam");
    assert_eq!(username.value(), "sam");

    user.update(|u| u.role = "user".into());
    TimeoutFuture::new(0).await;
    assert_eq!(role.value(), "user");
}

#[wasm_bindgen_test]
async fn review_entries_show_author_status_and_rating() {
    let review: Review = serde_json::from_str(
        r#"{"id": 1, "tool_id": 3, "user_id": 9, "user_rating": 4, "comment": null, "approval_status": "APPROVED"}"#,
    )
    .unwrap();

    mount_to_body(move || view! { <ReviewsList reviews=vec![review.clone()] empty_text="No reviews yet"/> });
    TimeoutFuture::new(0).await;

    let item: web_sys::Element = query(".review-item");
    let text = item.text_content().unwrap_or_default();
    assert!(text.contains("User ID: 9"), "{text}");
    assert!(text.contains("APPROVED"), "{text}");
    assert!(text.contains("★ 4/5"), "{text}");
    assert!(text.contains("No comment provided"), "{text}");
    let badge: web_sys::Element = query(".review-item .review-status");
    assert_eq!(badge.class_name(), "review-status approved");
}
