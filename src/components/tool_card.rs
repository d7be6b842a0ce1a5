/// Card summarising one tool in a grid or list.
/// Clicking the card calls `on_select`; `children` are rendered below the
/// details, e.g. the admin's edit and delete buttons.
use crate::models::{rating_label, Tool};
use leptos::*;

#[component]
pub fn ToolCard(
    tool: Tool,
    #[prop(optional)] on_select: Option<Callback<Tool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let selectable = on_select.is_some();
    let on_click = {
        let tool = tool.clone();
        move |_| {
            if let Some(on_select) = on_select {
                on_select.call(tool.clone());
            }
        }
    };

    view! {
        <div class="tool-card" class:clickable=selectable on:click=on_click>
            <h3>{tool.tool_name.clone()}</h3>
            <p class="use-case">{tool.use_case_or("No description")}</p>
            <div class="tool-meta">
                <span class="category">{tool.category_or("Uncategorized")}</span>
                <span class="pricing">{tool.pricing_type.to_string()}</span>
            </div>
            <div class="rating">{rating_label(tool.avg_rating)}</div>
            {children.map(|children| children())}
        </div>
    }
}
