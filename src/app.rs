/// Main application entry point for the board detail view.
/// Hosts the comment list with the stylesheet and routes it needs.
use leptos::*;
use leptos::logging::{error, log};
use leptos_meta::*;
use leptos_router::*;
use crate::components::comment_list::CommentList;
use crate::models::comment::{parse_comments, Comment};

// Sample payload shipped with the app until boards supply their own comments.
const SAMPLE_COMMENTS: &str = include_str!("../assets/comments.json");

/// Loads the bundled comments, falling back to an empty list on a bad payload.
pub fn sample_comments() -> Vec<Comment> {
    match parse_comments(SAMPLE_COMMENTS) {
        Ok(comments) => {
            log!("[BOARD] Loaded {} sample comments", comments.len());
            comments
        }
        Err(err) => {
            error!("[BOARD] Failed to load sample comments: {}", err);
            Vec::new()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/board-comments.css"/>
        <Title text="Board"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=BoardPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let comments = sample_comments();
    let (show_body, set_show_body) = create_signal(false);

    view! {
        <div class="board-info">
            <h2>{ "Comments" }</h2>
            <label>
                <input
                    type="checkbox"
                    prop:checked=show_body
                    on:change=move |e| set_show_body.set(event_target_checked(&e))
                />
                {"Show comment text"}
            </label>
            <CommentList comments=comments show_body=show_body />
        </div>
    }
}
