/// Top navigation. Which links show depends on the stored token and, when
/// `with_admin` is set, on the role in the user's profile.
use crate::api::ApiClient;
use crate::app::routes;
use leptos::logging::warn;
use leptos::*;
use leptos_router::{use_navigate, A};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    Guest,
    Member,
    Admin,
}

#[component]
pub fn NavBar(#[prop(optional)] with_admin: bool) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let initial = if client.is_logged_in() {
        Visitor::Member
    } else {
        Visitor::Guest
    };
    let (visitor, set_visitor) = create_signal(initial);

    if with_admin && initial == Visitor::Member {
        let client = client.clone();
        spawn_local(async move {
            match client.profile().await {
                Ok(profile) if profile.is_admin() => set_visitor.set(Visitor::Admin),
                Ok(_) => {}
                Err(err) => warn!("[NAV] could not check admin status: {}", err),
            }
        });
    }

    let logout = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        client.logout();
        set_visitor.set(Visitor::Guest);
        navigate(routes::HOME, Default::default());
    };

    view! {
        <nav class="navbar">
            <A href=routes::HOME class="logo">"AI Tool Directory"</A>
            <div class="nav-links">
                <Show
                    when=move || visitor.get() != Visitor::Guest
                    fallback=|| view! { <A href=routes::AUTH id="loginLink">"Login"</A> }
                >
                    <A href=routes::PROFILE id="profileLink">"Profile"</A>
                    <Show when=move || visitor.get() == Visitor::Admin>
                        <A href=routes::ADMIN id="adminLink">"Admin"</A>
                    </Show>
                </Show>
                <Show when=move || visitor.get() != Visitor::Guest>
                    <a href="#" id="logoutBtn" on:click=logout.clone()>"Logout"</a>
                </Show>
            </div>
        </nav>
    }
}
