use crate::api::ApiClient;
use crate::app::routes;
use crate::components::loader_overlay::LoaderState;
use crate::components::nav_bar::NavBar;
use crate::components::tool_card::ToolCard;
use crate::error::ApiError;
use crate::models::{PricingType, Tool, ToolFilter};
use crate::search::{filter_tools, Debouncer, SearchGeneration, SearchTicket};
use crate::utils::browser;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;

/// The three ways the catalog fills its grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    All,
    /// Name search: the whole list is fetched and filtered here, not on the server.
    Search(String),
    Filter(ToolFilter),
}

impl CatalogRequest {
    pub fn search(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.trim().is_empty() {
            Self::All
        } else {
            Self::Search(query)
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            Self::All => "Loading tools...",
            Self::Search(_) => "Searching...",
            Self::Filter(_) => "Filtering tools...",
        }
    }

    pub async fn run(&self, client: &ApiClient) -> Result<Vec<Tool>, ApiError> {
        match self {
            Self::All => client.list_tools(&ToolFilter::default()).await,
            Self::Search(query) => {
                let tools = client.list_tools(&ToolFilter::default()).await?;
                Ok(filter_tools(tools, query))
            }
            Self::Filter(filter) => client.list_tools(filter).await,
        }
    }

    /// Run the request and keep the result only if `ticket` is still the
    /// latest once it arrives; `None` means a newer load took over.
    pub async fn run_for(
        &self,
        client: &ApiClient,
        ticket: &SearchTicket,
    ) -> Option<Result<Vec<Tool>, ApiError>> {
        let result = self.run(client).await;
        if ticket.is_current() {
            Some(result)
        } else {
            log!("[CATALOG] discarding superseded {:?}", self);
            None
        }
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let loader = expect_context::<LoaderState>();
    let navigate = use_navigate();

    let (tools, set_tools) = create_signal(Vec::<Tool>::new());
    let (category, set_category) = create_signal(String::new());
    let (pricing, set_pricing) = create_signal(String::new());
    let (min_rating, set_min_rating) = create_signal(String::new());

    let generations = SearchGeneration::new();
    let debouncer = Debouncer::new(client.config().search_debounce_ms());

    let load = move |request: CatalogRequest| {
        let client = client.clone();
        let ticket = generations.begin();
        loader.show(request.loading_text());
        spawn_local(async move {
            let Some(result) = request.run_for(&client, &ticket).await else {
                return;
            };
            loader.hide();
            match (result, &request) {
                (Ok(found), _) => set_tools.set(found),
                (Err(err), CatalogRequest::Filter(_)) => {
                    error!("[CATALOG] Error filtering tools: {}", err);
                    browser::alert("Error applying filters. Please try again.");
                }
                (Err(err), CatalogRequest::Search(_)) => {
                    error!("[CATALOG] Error searching tools: {}", err);
                }
                (Err(err), CatalogRequest::All) => {
                    error!("[CATALOG] Error loading tools: {}", err);
                    set_tools.set(Vec::new());
                }
            }
        });
    };

    load(CatalogRequest::All);

    let on_keyup = {
        let load = load.clone();
        move |ev: ev::KeyboardEvent| {
            let query = event_target_value(&ev);
            let load = load.clone();
            debouncer.schedule(move || load(CatalogRequest::search(query)));
        }
    };

    let apply_filters = {
        let load = load.clone();
        move |_| {
            let filter = ToolFilter {
                category: Some(category.get_untracked()),
                pricing_type: Some(pricing.get_untracked()),
                min_rating: Some(min_rating.get_untracked()),
            };
            load(CatalogRequest::Filter(filter));
        }
    };

    let open_tool = Callback::new(move |tool: Tool| {
        navigate(&routes::tool(&tool.id), Default::default());
    });

    view! {
        <NavBar with_admin=true/>
        <section class="hero">
            <h1>"Discover AI Tools"</h1>
            <input
                id="searchInput"
                type="text"
                placeholder="Search tools by name or use case..."
                on:keyup=on_keyup
            />
        </section>
        <section class="filters">
            <input
                type="text"
                placeholder="Category"
                on:input=move |ev| set_category.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_pricing.set(event_target_value(&ev))>
                <option value="">"All pricing"</option>
                {PricingType::CHOICES
                    .iter()
                    .map(|p| view! { <option value=p.as_str().to_string()>{p.as_str().to_string()}</option> })
                    .collect_view()}
            </select>
            <select on:change=move |ev| set_min_rating.set(event_target_value(&ev))>
                <option value="">"Any rating"</option>
                <option value="4">"4+ stars"</option>
                <option value="3">"3+ stars"</option>
                <option value="2">"2+ stars"</option>
                <option value="1">"1+ stars"</option>
            </select>
            <button class="btn-primary" on:click=apply_filters>"Apply Filters"</button>
        </section>
        <div id="toolsList" class="tools-grid">
            {move || {
                let current = tools.get();
                if current.is_empty() {
                    view! { <p class="empty">"No tools found"</p> }.into_view()
                } else {
                    current
                        .into_iter()
                        .map(|tool| view! { <ToolCard tool=tool on_select=open_tool/> })
                        .collect_view()
                }
            }}
        </div>
    }
}
