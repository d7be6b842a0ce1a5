use super::{Notice, Redirect};
use crate::api::ApiClient;
use crate::app::routes;
use crate::components::message_banner::MessageBanner;
use crate::components::nav_bar::NavBar;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::error::ApiError;
use crate::models::{rating_label, EntityId, NewReview, Review, Tool, ToolFilter};
use crate::utils::browser;
use leptos::logging::error;
use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use std::time::Duration;

/// Delay before the review list is refreshed after a submission.
const REVIEW_RELOAD_DELAY: Duration = Duration::from_millis(1500);

/// Everything the detail page's handlers need, parsed once from the route.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPageContext {
    pub tool_id: EntityId,
}

impl ToolPageContext {
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        let id = param.map(str::trim).filter(|id| !id.is_empty())?;
        Some(Self {
            tool_id: EntityId::from(id),
        })
    }
}

/// What the detail section shows once the tool lookup settled.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolLookup {
    Found(Tool),
    NotFound,
    Failed,
}

impl ToolLookup {
    pub fn from_result(result: Result<Option<Tool>, ApiError>) -> Self {
        match result {
            Ok(Some(tool)) => Self::Found(tool),
            Ok(None) => Self::NotFound,
            Err(err) => {
                error!("[DETAIL] Error loading tool detail: {}", err);
                Self::Failed
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// No token: the visitor has to log in first.
    LoginRequired(Redirect),
    Failed(Notice),
}

/// The backend has no public single-tool lookup for visitors, so the tool is
/// picked out of the full listing.
pub async fn load_tool(client: &ApiClient, ctx: &ToolPageContext) -> Result<Option<Tool>, ApiError> {
    let tools = client.list_tools(&ToolFilter::default()).await?;
    Ok(tools.into_iter().find(|tool| tool.id == ctx.tool_id))
}

pub async fn load_reviews(client: &ApiClient, ctx: &ToolPageContext) -> Result<Vec<Review>, ApiError> {
    let reviews = client.approved_reviews().await?;
    Ok(reviews
        .into_iter()
        .filter(|review| review.tool_id == ctx.tool_id)
        .collect())
}

pub async fn submit_review(
    client: &ApiClient,
    ctx: &ToolPageContext,
    rating: Option<u8>,
    comment: String,
) -> Result<Notice, SubmitError> {
    if !client.is_logged_in() {
        return Err(SubmitError::LoginRequired(Redirect::with_alert(
            routes::AUTH,
            "Please login to submit a review",
        )));
    }
    let Some(user_rating) = rating.filter(|r| (1..=5).contains(r)) else {
        return Err(SubmitError::Failed(Notice::error("Please select a rating")));
    };

    let review = NewReview {
        tool_id: ctx.tool_id.clone(),
        user_rating,
        comment,
    };
    match client.submit_review(&review).await {
        Ok(_) => Ok(Notice::success("Review submitted successfully!")),
        Err(err) => Err(SubmitError::Failed(Notice::error(format!(
            "Error submitting review: {err}"
        )))),
    }
}

#[component]
pub fn ToolDetailPage() -> impl IntoView {
    let params = use_params_map();
    // Rebuilt whenever the id changes, e.g. /tools/1 -> /tools/2.
    let ctx = create_memo(move |_| {
        params.with(|p| ToolPageContext::from_param(p.get("id").map(String::as_str)))
    });

    move || match ctx.get() {
        Some(ctx) => view! { <ToolDetail ctx=ctx/> }.into_view(),
        None => {
            browser::alert("Tool ID not found");
            browser::history_back();
            view! { <p>"Tool ID not found"</p> }.into_view()
        }
    }
}

#[component]
fn ToolDetail(ctx: ToolPageContext) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    // None while loading.
    let (tool, set_tool) = create_signal(None::<ToolLookup>);
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let rating = create_rw_signal(None::<u8>);
    let comment = create_rw_signal(String::new());
    let (message, set_message) = create_signal(None::<Notice>);

    let reload_reviews = {
        let client = client.clone();
        let ctx = ctx.clone();
        move || {
            let client = client.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                match load_reviews(&client, &ctx).await {
                    Ok(found) => set_reviews.set(found),
                    Err(err) => error!("[DETAIL] Error loading reviews: {}", err),
                }
            });
        }
    };

    {
        let client = client.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            let lookup = ToolLookup::from_result(load_tool(&client, &ctx).await);
            set_tool.set(Some(lookup));
        });
    }
    reload_reviews();

    let on_submit = Callback::new(move |()| {
        let client = client.clone();
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        let reload_reviews = reload_reviews.clone();
        let chosen = rating.get_untracked();
        let text = comment.get_untracked();
        spawn_local(async move {
            match submit_review(&client, &ctx, chosen, text).await {
                Ok(notice) => {
                    set_message.set(Some(notice));
                    rating.set(None);
                    comment.set(String::new());
                    set_timeout(reload_reviews, REVIEW_RELOAD_DELAY);
                }
                Err(SubmitError::LoginRequired(redirect)) => redirect.follow(navigate),
                Err(SubmitError::Failed(notice)) => set_message.set(Some(notice)),
            }
        });
    });

    view! {
        <NavBar/>
        <div id="toolDetail" class="tool-detail">
            {move || match tool.get() {
                None => view! { <p>"Loading..."</p> }.into_view(),
                Some(ToolLookup::NotFound) => view! { <p>"Tool not found"</p> }.into_view(),
                Some(ToolLookup::Failed) => {
                    view! { <p class="error-text">"Error loading tool details"</p> }.into_view()
                }
                Some(ToolLookup::Found(tool)) => view! {
                    <h2>{tool.tool_name.clone()}</h2>
                    <div class="tool-detail-info">
                        <label>"Use Case"</label>
                        <p>{tool.use_case_or("N/A")}</p>
                    </div>
                    <div class="tool-detail-info">
                        <label>"Category"</label>
                        <p>{tool.category_or("N/A")}</p>
                    </div>
                    <div class="tool-detail-info">
                        <label>"Pricing"</label>
                        <p>{tool.pricing_type.to_string()}</p>
                    </div>
                    <div class="tool-detail-info">
                        <label>"Average Rating"</label>
                        <p>{rating_label(tool.avg_rating)}</p>
                    </div>
                }
                .into_view(),
            }}
        </div>
        <section class="reviews">
            <h3>"Reviews"</h3>
            <div id="reviewsList">
                {move || view! { <ReviewsList reviews=reviews.get() empty_text="No reviews yet"/> }}
            </div>
        </section>
        <section class="review-form">
            <ReviewForm rating=rating comment=comment on_submit=on_submit/>
            <MessageBanner notice=message/>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_requires_an_id() {
        assert_eq!(ToolPageContext::from_param(None), None);
        assert_eq!(ToolPageContext::from_param(Some("  ")), None);
        assert_eq!(
            ToolPageContext::from_param(Some("42")).map(|c| c.tool_id),
            Some(EntityId::from(42))
        );
    }

    #[test]
    fn each_route_id_gets_its_own_context() {
        let first = ToolPageContext::from_param(Some("1"));
        assert_ne!(first, ToolPageContext::from_param(Some("2")));
        assert_eq!(first, ToolPageContext::from_param(Some(" 1 ")));
    }
}
