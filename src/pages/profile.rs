use super::{require_login, Notice, Redirect};
use crate::api::ApiClient;
use crate::components::message_banner::MessageBanner;
use crate::components::nav_bar::NavBar;
use crate::error::ApiError;
use crate::models::{PasswordChange, UserProfile};
use leptos::logging::error;
use leptos::*;
use leptos_router::use_navigate;

/// `Ok(None)` when the profile could not be fetched for a reason other than
/// an expired session; the page then keeps its placeholders.
pub async fn load_profile(client: &ApiClient) -> Result<Option<UserProfile>, Redirect> {
    require_login(client)?;
    match client.profile().await {
        Ok(profile) => Ok(Some(profile)),
        Err(err) if err.is_unauthorized() => Err(Redirect::to_auth()),
        Err(err) => {
            error!("[PROFILE] Error loading profile: {}", err);
            Ok(None)
        }
    }
}

/// Outcome is decided by the HTTP status alone.
pub async fn change_password(client: &ApiClient, current: &str, new: &str) -> Result<Notice, Notice> {
    if current.is_empty() || new.is_empty() {
        return Err(Notice::error("Please fill all fields"));
    }
    let change = PasswordChange {
        password: current.to_string(),
        new_password: new.to_string(),
    };
    match client.change_password(&change).await {
        Ok(()) => Ok(Notice::success("Password changed successfully!")),
        Err(ApiError::Http { .. }) => Err(Notice::error("Error changing password")),
        Err(err) => Err(Notice::error(format!("Error: {err}"))),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let (profile, set_profile) = create_signal(None::<UserProfile>);
    let current = create_rw_signal(String::new());
    let new = create_rw_signal(String::new());
    let (message, set_message) = create_signal(None::<Notice>);

    match require_login(&client) {
        // Leave before anything protected is requested.
        Err(redirect) => request_animation_frame(move || redirect.follow(navigate)),
        Ok(()) => {
            let client = client.clone();
            spawn_local(async move {
                match load_profile(&client).await {
                    Ok(found) => set_profile.set(found),
                    Err(redirect) => redirect.follow(navigate),
                }
            });
        }
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let (old_password, new_password) = (current.get_untracked(), new.get_untracked());
        spawn_local(async move {
            match change_password(&client, &old_password, &new_password).await {
                Ok(notice) => {
                    set_message.set(Some(notice));
                    current.set(String::new());
                    new.set(String::new());
                }
                Err(notice) => set_message.set(Some(notice)),
            }
        });
    };

    view! {
        <NavBar/>
        <div class="profile-container">
            <h2>"My Profile"</h2>
            <div class="profile-info">
                <p><strong>"Username: "</strong><span id="profileUsername">{profile_field(profile, |p| p.username.clone())}</span></p>
                <p><strong>"Email: "</strong><span id="profileEmail">{profile_field(profile, |p| p.email.clone())}</span></p>
                <p><strong>"Name: "</strong><span id="profileName">{profile_field(profile, UserProfile::full_name)}</span></p>
                <p><strong>"Role: "</strong><span id="profileRole">{profile_field(profile, |p| p.role.as_str().to_uppercase())}</span></p>
            </div>
            <h3>"Change Password"</h3>
            <form id="passwordForm" on:submit=on_submit>
                <input
                    type="password"
                    placeholder="Current password"
                    prop:value=current
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=new
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Change Password"</button>
            </form>
            <MessageBanner notice=message/>
        </div>
    }
}

fn profile_field(
    profile: ReadSignal<Option<UserProfile>>,
    pick: fn(&UserProfile) -> String,
) -> impl Fn() -> String {
    move || profile.with(|p| p.as_ref().map(pick).unwrap_or_else(|| "-".to_string()))
}
