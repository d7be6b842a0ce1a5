use leptos::*;

const STAR_CHOICES: [u8; 5] = [5, 4, 3, 2, 1];

/// Star rating plus comment. The parent owns both signals so it can clear
/// them once the review went through.
#[component]
pub fn ReviewForm(
    rating: RwSignal<Option<u8>>,
    comment: RwSignal<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit_review = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form id="reviewForm" on:submit=submit_review>
            <h3>"Write a Review"</h3>
            <div class="star-rating">
                {STAR_CHOICES
                    .into_iter()
                    .map(|stars| {
                        let id = format!("star{stars}");
                        view! {
                            <input
                                type="radio"
                                name="rating"
                                id=id.clone()
                                value=stars.to_string()
                                prop:checked=move || rating.get() == Some(stars)
                                on:change=move |_| rating.set(Some(stars))
                            />
                            <label for=id>"★"</label>
                        }
                    })
                    .collect_view()}
            </div>
            <textarea
                placeholder="Share your experience with this tool"
                prop:value=comment
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn-primary">"Submit Review"</button>
        </form>
    }
}
