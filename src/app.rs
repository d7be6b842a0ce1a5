/// Root component: builds the API client once and routes between the pages.
use crate::api::ApiClient;
use crate::components::loader_overlay::{LoaderOverlay, LoaderState};
use crate::config::ClientConfig;
use crate::pages::{AdminPage, AuthPage, CatalogPage, ProfilePage, ToolDetailPage};
use leptos::logging::{error, log};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

pub mod routes {
    use crate::models::EntityId;

    pub const HOME: &str = "/";
    pub const AUTH: &str = "/auth";
    pub const PROFILE: &str = "/profile";
    pub const ADMIN: &str = "/admin";

    pub fn tool(id: &EntityId) -> String {
        format!("/tools/{}", id.path_segment())
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_environment().unwrap_or_else(|err| {
        error!("[APP] invalid configuration ({}), using defaults", err);
        ClientConfig::default()
    });
    log!("[APP] API base URL: {}", config.api_base_url());

    provide_context(ApiClient::browser(config));
    provide_context(LoaderState::new());

    view! {
        <Title text="AI Tool Directory"/>
        <Router>
            <main>
                <Routes>
                    <Route path=routes::HOME view=CatalogPage/>
                    <Route path="/tools/:id" view=ToolDetailPage/>
                    <Route path=routes::AUTH view=AuthPage/>
                    <Route path=routes::PROFILE view=ProfilePage/>
                    <Route path=routes::ADMIN view=AdminPage/>
                    <Route path="/*any" view=|| view! { <h1>"Page not found"</h1> }/>
                </Routes>
            </main>
            <LoaderOverlay/>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::routes;
    use crate::models::EntityId;

    #[test]
    fn tool_route_encodes_the_id() {
        assert_eq!(routes::tool(&EntityId::from(12)), "/tools/12");
        assert_eq!(routes::tool(&EntityId::from("a b")), "/tools/a%20b");
    }
}
