use super::{require_login, Notice, Redirect};
use crate::api::{ApiClient, ReviewListing};
use crate::app::routes;
use crate::components::message_banner::MessageBanner;
use crate::components::nav_bar::NavBar;
use crate::components::reviews_list::star_label;
use crate::components::tool_card::ToolCard;
use crate::components::tool_form::ToolForm;
use crate::error::ApiError;
use crate::models::{
    ApprovalStatus, EntityId, NewTool, PricingType, Review, Tool, ToolFilter, ToolPatch, UserProfile,
};
use crate::utils::browser;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Tools,
    Reviews,
}

/// Contents of the add/edit tool form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolDraft {
    /// Set when editing an existing tool.
    pub id: Option<EntityId>,
    pub tool_name: String,
    pub use_case: String,
    pub category: String,
    pub pricing_type: PricingType,
}

impl ToolDraft {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            id: Some(tool.id.clone()),
            tool_name: tool.tool_name.clone(),
            use_case: tool.use_case.clone().unwrap_or_default(),
            category: tool.category.clone().unwrap_or_default(),
            pricing_type: tool.pricing_type.clone(),
        }
    }

    /// New tools start unrated; a name is the only thing checked here.
    pub fn to_new_tool(&self) -> Result<NewTool, Notice> {
        if self.tool_name.trim().is_empty() {
            return Err(Notice::error("Tool name is required"));
        }
        Ok(NewTool {
            tool_name: self.tool_name.clone(),
            use_case: self.use_case.clone(),
            category: self.category.clone(),
            pricing_type: self.pricing_type.clone(),
            avg_rating: 0.0,
        })
    }

    pub fn to_patch(&self) -> ToolPatch {
        ToolPatch {
            tool_name: Some(self.tool_name.clone()),
            use_case: Some(self.use_case.clone()),
            category: Some(self.category.clone()),
            pricing_type: Some(self.pricing_type.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn target(self) -> ApprovalStatus {
        match self {
            Self::Approve => ApprovalStatus::Approved,
            Self::Reject => ApprovalStatus::Rejected,
        }
    }

    pub fn for_target(status: ApprovalStatus) -> Option<Self> {
        match status {
            ApprovalStatus::Approved => Some(Self::Approve),
            ApprovalStatus::Rejected => Some(Self::Reject),
            ApprovalStatus::Pending => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }

    /// Rejecting an approved review is styled as a warning rather than a hard no.
    pub fn button_class(self, current: ApprovalStatus) -> &'static str {
        match (self, current) {
            (Self::Approve, _) => "btn-success",
            (Self::Reject, ApprovalStatus::Approved) => "btn-warning",
            (Self::Reject, _) => "btn-danger",
        }
    }

    fn done_text(self) -> &'static str {
        match self {
            Self::Approve => "Review approved!",
            Self::Reject => "Review rejected!",
        }
    }

    fn failure_text(self, err: &ApiError) -> String {
        match self {
            Self::Approve => format!("Error approving review: {err}"),
            Self::Reject => format!("Error rejecting review: {err}"),
        }
    }
}

/// Buttons offered for a review in `status`.
pub fn moderation_actions(status: ApprovalStatus) -> Vec<ModerationDecision> {
    status
        .transitions()
        .iter()
        .filter_map(|&target| ModerationDecision::for_target(target))
        .collect()
}

/// Anonymous visitors go to the login page without any request being made;
/// signed-in non-admins are told off and sent home.
pub async fn admin_gate(client: &ApiClient) -> Result<UserProfile, Redirect> {
    require_login(client)?;
    match client.profile().await {
        Ok(profile) if profile.is_admin() => Ok(profile),
        Ok(profile) => {
            log!("[ADMIN] {} is not an admin", profile.username);
            Err(Redirect::with_alert(routes::HOME, "Admin access required"))
        }
        Err(err) => {
            error!("[ADMIN] Error checking admin status: {}", err);
            Err(Redirect::to_auth())
        }
    }
}

pub async fn load_tools(client: &ApiClient) -> Result<Vec<Tool>, ApiError> {
    client.list_tools(&ToolFilter::default()).await
}

pub async fn add_tool(client: &ApiClient, draft: &ToolDraft) -> Result<Notice, Notice> {
    let tool = draft.to_new_tool()?;
    match client.add_tool(&tool).await {
        Ok(created) => {
            log!("[ADMIN] added tool {}", created.id);
            Ok(Notice::success("Tool added successfully!"))
        }
        Err(ApiError::Rejected(detail)) => Err(Notice::error(detail)),
        Err(err) => Err(Notice::error(format!("Error: {err}"))),
    }
}

pub async fn edit_tool(client: &ApiClient, id: &EntityId) -> Result<ToolDraft, Notice> {
    match client.get_tool(id).await {
        Ok(tool) => Ok(ToolDraft::from_tool(&tool)),
        Err(err) if err.is_not_found() => Err(Notice::error("Tool not found")),
        Err(err) => {
            error!("[ADMIN] Error loading tool {} for edit: {}", id, err);
            Err(Notice::error("Error loading tool for edit"))
        }
    }
}

pub async fn update_tool(client: &ApiClient, draft: &ToolDraft) -> Result<Notice, Notice> {
    let Some(id) = draft.id.as_ref() else {
        return Err(Notice::error("Tool not found"));
    };
    match client.update_tool(id, &draft.to_patch()).await {
        Ok(payload) => {
            log!("[ADMIN] updated tool {} (response: {:?})", id, payload);
            Ok(Notice::success("Tool updated successfully!"))
        }
        Err(err) => {
            let text = err.to_string();
            Err(Notice::error(if text.is_empty() {
                "Error updating tool".to_string()
            } else {
                text
            }))
        }
    }
}

pub async fn delete_tool(client: &ApiClient, id: &EntityId) -> Result<Notice, Notice> {
    client
        .delete_tool(id)
        .await
        .map(|()| Notice::success("Tool deleted successfully!"))
        .map_err(|err| Notice::error(format!("Error deleting tool: {err}")))
}

pub async fn load_reviews(client: &ApiClient, listing: ReviewListing) -> Result<Vec<Review>, ApiError> {
    client.reviews(listing).await
}

pub async fn moderate(
    client: &ApiClient,
    id: &EntityId,
    decision: ModerationDecision,
) -> Result<Notice, Notice> {
    match client.set_review_status(id, decision.target()).await {
        Ok(review) => {
            log!("[ADMIN] review {} is now {}", review.id, review.approval_status);
            Ok(Notice::success(decision.done_text()))
        }
        Err(err) => Err(Notice::error(decision.failure_text(&err))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModerationOutcome {
    pub notice: Notice,
    /// Fresh listing; only fetched when the decision went through.
    pub reviews: Option<Result<Vec<Review>, ApiError>>,
}

pub async fn moderate_and_reload(
    client: &ApiClient,
    id: &EntityId,
    decision: ModerationDecision,
    listing: ReviewListing,
) -> ModerationOutcome {
    match moderate(client, id, decision).await {
        Ok(notice) => ModerationOutcome {
            notice,
            reviews: Some(load_reviews(client, listing).await),
        },
        Err(notice) => ModerationOutcome {
            notice,
            reviews: None,
        },
    }
}

/// State and handlers of the admin page, built once when the page mounts.
#[derive(Clone, Copy)]
struct AdminContext {
    client: StoredValue<ApiClient>,
    tab: RwSignal<AdminTab>,
    tools: RwSignal<Vec<Tool>>,
    tool_message: RwSignal<Option<Notice>>,
    add_open: RwSignal<bool>,
    add_draft: RwSignal<ToolDraft>,
    edit_open: RwSignal<bool>,
    edit_draft: RwSignal<ToolDraft>,
    edit_message: RwSignal<Option<Notice>>,
    listing: RwSignal<ReviewListing>,
    reviews: RwSignal<Option<Result<Vec<Review>, ApiError>>>,
    review_message: RwSignal<Option<Notice>>,
}

impl AdminContext {
    fn new(client: ApiClient) -> Self {
        Self {
            client: store_value(client),
            tab: create_rw_signal(AdminTab::Tools),
            tools: create_rw_signal(Vec::new()),
            tool_message: create_rw_signal(None),
            add_open: create_rw_signal(false),
            add_draft: create_rw_signal(ToolDraft::default()),
            edit_open: create_rw_signal(false),
            edit_draft: create_rw_signal(ToolDraft::default()),
            edit_message: create_rw_signal(None),
            listing: create_rw_signal(ReviewListing::default()),
            reviews: create_rw_signal(None),
            review_message: create_rw_signal(None),
        }
    }

    fn switch_tab(self, ev: ev::MouseEvent, tab: AdminTab) {
        ev.prevent_default();
        self.tab.set(tab);
        if tab == AdminTab::Reviews {
            self.reload_reviews();
        }
    }

    fn reload_tools(self) {
        let client = self.client.get_value();
        spawn_local(async move {
            match load_tools(&client).await {
                Ok(tools) => self.tools.set(tools),
                Err(err) => {
                    error!("[ADMIN] Error loading tools: {}", err);
                    self.tool_message.set(Some(Notice::error("Error loading tools")));
                }
            }
        });
    }

    fn open_add_form(self) {
        self.edit_open.set(false);
        self.add_open.set(true);
    }

    fn close_add_form(self) {
        self.add_open.set(false);
        self.add_draft.set(ToolDraft::default());
    }

    fn submit_new_tool(self, draft: ToolDraft) {
        if let Err(notice) = draft.to_new_tool() {
            self.tool_message.set(Some(notice));
            return;
        }
        let client = self.client.get_value();
        spawn_local(async move {
            match add_tool(&client, &draft).await {
                Ok(notice) => {
                    self.tool_message.set(Some(notice));
                    self.close_add_form();
                    self.reload_tools();
                }
                Err(notice) => self.tool_message.set(Some(notice)),
            }
        });
    }

    fn start_edit(self, id: EntityId) {
        let client = self.client.get_value();
        spawn_local(async move {
            match edit_tool(&client, &id).await {
                Ok(draft) => {
                    self.edit_draft.set(draft);
                    self.edit_message.set(None);
                    self.add_open.set(false);
                    self.edit_open.set(true);
                }
                Err(notice) => self.tool_message.set(Some(notice)),
            }
        });
    }

    fn close_edit_form(self) {
        self.edit_open.set(false);
        self.edit_draft.set(ToolDraft::default());
        self.edit_message.set(None);
    }

    fn submit_edit(self, draft: ToolDraft) {
        let client = self.client.get_value();
        spawn_local(async move {
            match update_tool(&client, &draft).await {
                Ok(notice) => {
                    self.tool_message.set(Some(notice));
                    self.close_edit_form();
                    self.reload_tools();
                }
                Err(notice) => self.edit_message.set(Some(notice)),
            }
        });
    }

    fn confirm_delete(self, id: EntityId) {
        if !browser::confirm("Are you sure you want to delete this tool?") {
            return;
        }
        let client = self.client.get_value();
        spawn_local(async move {
            let result = delete_tool(&client, &id).await;
            let deleted = result.is_ok();
            self.tool_message.set(Some(result.unwrap_or_else(|notice| notice)));
            if deleted {
                self.reload_tools();
            }
        });
    }

    fn reload_reviews(self) {
        let client = self.client.get_value();
        let listing = self.listing.get_untracked();
        spawn_local(async move {
            let result = load_reviews(&client, listing).await;
            if let Err(err) = &result {
                error!("[ADMIN] Error loading reviews: {}", err);
            }
            self.reviews.set(Some(result));
        });
    }

    fn moderate(self, id: EntityId, decision: ModerationDecision) {
        let client = self.client.get_value();
        let listing = self.listing.get_untracked();
        spawn_local(async move {
            let outcome = moderate_and_reload(&client, &id, decision, listing).await;
            self.review_message.set(Some(outcome.notice));
            if let Some(reviews) = outcome.reviews {
                self.reviews.set(Some(reviews));
            }
        });
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let ctx = AdminContext::new(client.clone());
    provide_context(ctx);
    let authorized = create_rw_signal(false);

    match require_login(&client) {
        Err(redirect) => request_animation_frame(move || redirect.follow(navigate)),
        Ok(()) => spawn_local(async move {
            match admin_gate(&client).await {
                Ok(profile) => {
                    log!("[ADMIN] access granted to {}", profile.username);
                    authorized.set(true);
                    ctx.reload_tools();
                }
                Err(redirect) => redirect.follow(navigate),
            }
        }),
    }

    view! {
        <NavBar/>
        <Show
            when=move || authorized.get()
            fallback=|| view! { <p class="loading">"Checking access..."</p> }
        >
            <AdminConsole/>
        </Show>
    }
}

#[component]
fn AdminConsole() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let tab_class = move |tab: AdminTab| {
        move || {
            if ctx.tab.get() == tab {
                "tab-btn active"
            } else {
                "tab-btn"
            }
        }
    };

    view! {
        <div class="admin-container">
            <h2>"Admin Dashboard"</h2>
            <div class="tabs">
                <button
                    class=tab_class(AdminTab::Tools)
                    on:click=move |ev| ctx.switch_tab(ev, AdminTab::Tools)
                >
                    "Tools Management"
                </button>
                <button
                    class=tab_class(AdminTab::Reviews)
                    on:click=move |ev| ctx.switch_tab(ev, AdminTab::Reviews)
                >
                    "Reviews Moderation"
                </button>
            </div>
            {move || match ctx.tab.get() {
                AdminTab::Tools => view! { <ToolsPanel/> }.into_view(),
                AdminTab::Reviews => view! { <ReviewsPanel/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ToolsPanel() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();

    view! {
        <div id="toolsTab" class="tab-content active">
            <button class="btn-primary" on:click=move |_| ctx.open_add_form()>"Add New Tool"</button>
            <MessageBanner notice=ctx.tool_message/>
            <Show when=move || ctx.add_open.get()>
                <div id="addToolForm" class="admin-form">
                    <h3>"Add Tool"</h3>
                    <ToolForm
                        draft=ctx.add_draft
                        submit_label="Add Tool"
                        on_submit=Callback::new(move |draft| ctx.submit_new_tool(draft))
                        on_cancel=Callback::new(move |()| ctx.close_add_form())
                    />
                </div>
            </Show>
            <Show when=move || ctx.edit_open.get()>
                <div id="editToolForm" class="admin-form">
                    <h3>"Edit Tool"</h3>
                    <ToolForm
                        draft=ctx.edit_draft
                        submit_label="Save Changes"
                        on_submit=Callback::new(move |draft| ctx.submit_edit(draft))
                        on_cancel=Callback::new(move |()| ctx.close_edit_form())
                    />
                    <MessageBanner notice=ctx.edit_message/>
                </div>
            </Show>
            <div id="toolsList" class="admin-list">
                {move || {
                    let tools = ctx.tools.get();
                    if tools.is_empty() {
                        return view! { <p>"No tools found"</p> }.into_view();
                    }
                    tools
                        .into_iter()
                        .map(|tool| {
                            let edit_id = tool.id.clone();
                            let delete_id = tool.id.clone();
                            view! {
                                <ToolCard tool=tool>
                                    <div class="admin-actions">
                                        <button
                                            class="btn-primary"
                                            on:click=move |_| ctx.start_edit(edit_id.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn-danger"
                                            on:click=move |_| ctx.confirm_delete(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </ToolCard>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ReviewsPanel() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();

    view! {
        <div id="reviewsTab" class="tab-content active">
            <label for="reviewStatusFilter">"Status "</label>
            <select
                id="reviewStatusFilter"
                on:change=move |ev| {
                    ctx.listing.set(ReviewListing::from_select(&event_target_value(&ev)));
                    ctx.reload_reviews();
                }
            >
                {[("All", ReviewListing::All), ("Pending", ReviewListing::Pending), ("Approved", ReviewListing::Approved)]
                    .into_iter()
                    .map(|(label, listing)| view! {
                        <option
                            value=listing.as_str()
                            prop:selected=move || ctx.listing.get() == listing
                        >
                            {label}
                        </option>
                    })
                    .collect_view()}
            </select>
            <MessageBanner notice=ctx.review_message/>
            <div id="reviewsList" class="admin-list">
                {move || match ctx.reviews.get() {
                    None => view! { <p>"Loading reviews..."</p> }.into_view(),
                    Some(Err(err)) => {
                        view! { <p class="error-text">{format!("Error loading reviews: {err}")}</p> }
                            .into_view()
                    }
                    Some(Ok(reviews)) if reviews.is_empty() => {
                        view! { <p>"No reviews found"</p> }.into_view()
                    }
                    Some(Ok(reviews)) => reviews
                        .into_iter()
                        .map(|review| view! { <ModerationItem review=review/> })
                        .collect_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ModerationItem(review: Review) -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let status = review.approval_status;
    let actions = moderation_actions(status)
        .into_iter()
        .map(|decision| {
            let id = review.id.clone();
            view! {
                <button
                    class=decision.button_class(status)
                    on:click=move |_| ctx.moderate(id.clone(), decision)
                >
                    {decision.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="admin-item">
            <div class="admin-item-info">
                <h3>{format!("Tool ID: {}", review.tool_id)}</h3>
                <p><strong>"User ID: "</strong>{review.user_id.to_string()}</p>
                <p><strong>"Rating: "</strong>{star_label(review.user_rating)}</p>
                <p><strong>"Comment: "</strong>{review.comment_or("No comment")}</p>
                <span class=format!("review-status {}", status.css_class())>{status.as_str()}</span>
            </div>
            <div class="admin-actions">{actions}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected_before_any_request() {
        let draft = ToolDraft {
            tool_name: "   ".into(),
            ..ToolDraft::default()
        };
        assert_eq!(draft.to_new_tool(), Err(Notice::error("Tool name is required")));
    }

    #[test]
    fn new_tools_start_unrated() {
        let draft = ToolDraft {
            tool_name: "Sketchpad".into(),
            pricing_type: PricingType::Paid,
            ..ToolDraft::default()
        };
        let tool = draft.to_new_tool().unwrap();
        assert_eq!(tool.avg_rating, 0.0);
        assert_eq!(tool.pricing_type, PricingType::Paid);
    }

    #[test]
    fn actions_follow_the_review_state() {
        use ModerationDecision::*;
        assert_eq!(moderation_actions(ApprovalStatus::Pending), vec![Approve, Reject]);
        assert_eq!(moderation_actions(ApprovalStatus::Approved), vec![Reject]);
        assert_eq!(moderation_actions(ApprovalStatus::Rejected), vec![Approve]);
    }

    #[test]
    fn reject_on_approved_is_a_warning() {
        assert_eq!(
            ModerationDecision::Reject.button_class(ApprovalStatus::Approved),
            "btn-warning"
        );
        assert_eq!(
            ModerationDecision::Reject.button_class(ApprovalStatus::Pending),
            "btn-danger"
        );
    }
}
