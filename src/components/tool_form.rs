/// Add/edit form for a tool, bound to a draft the admin page owns.
use crate::models::PricingType;
use crate::pages::admin::ToolDraft;
use leptos::*;

#[component]
pub fn ToolForm(
    draft: RwSignal<ToolDraft>,
    submit_label: &'static str,
    on_submit: Callback<ToolDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(draft.get_untracked());
    };

    view! {
        <form class="tool-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder="Tool name"
                prop:value=move || draft.with(|d| d.tool_name.clone())
                on:input=move |e| draft.update(|d| d.tool_name = event_target_value(&e))
            />
            <textarea
                placeholder="Use case"
                prop:value=move || draft.with(|d| d.use_case.clone())
                on:input=move |e| draft.update(|d| d.use_case = event_target_value(&e))
            ></textarea>
            <input
                type="text"
                placeholder="Category"
                prop:value=move || draft.with(|d| d.category.clone())
                on:input=move |e| draft.update(|d| d.category = event_target_value(&e))
            />
            <select
                name="pricing_type"
                on:change=move |e| draft.update(|d| d.pricing_type = PricingType::from(event_target_value(&e)))
            >
                {PricingType::CHOICES
                    .into_iter()
                    .map(|choice| {
                        let label = choice.as_str().to_string();
                        view! {
                            <option
                                value=label.clone()
                                prop:selected=move || draft.with(|d| d.pricing_type == choice)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <div class="form-actions">
                <button type="submit" class="btn-primary">{submit_label}</button>
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
