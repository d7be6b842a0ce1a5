/// Read-only list of reviews under a tool.
use crate::models::review::Review;
use leptos::*;

#[component]
pub fn ReviewsList(reviews: Vec<Review>, empty_text: &'static str) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="empty">{empty_text}</p> }.into_view();
    }

    reviews
        .into_iter()
        .map(|review| {
            let status = review.approval_status;
            view! {
                <div class="review-item">
                    <div class="review-header">
                        <div>
                            <p class="review-user">{format!("User ID: {}", review.user_id)}</p>
                            <span class=format!("review-status {}", status.css_class())>
                                {status.as_str()}
                            </span>
                        </div>
                        <div class="review-rating">{star_label(review.user_rating)}</div>
                    </div>
                    <p class="review-comment">{review.comment_or("No comment provided")}</p>
                </div>
            }
        })
        .collect_view()
}

/// `★ 4/5`
pub fn star_label(rating: u8) -> String {
    format!("★ {rating}/5")
}
