pub mod loader_overlay;
pub mod message_banner;
pub mod nav_bar;
pub mod review_form;
pub mod reviews_list;
pub mod tool_card;
pub mod tool_form;
