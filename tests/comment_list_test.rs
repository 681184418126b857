#![cfg(target_arch = "wasm32")]
// Run with: wasm-pack test --headless --firefox -- --no-default-features --features wasm-test
use wasm_bindgen_test::*;
use leptos::*;
use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use board_comments::components::comment_list::{CommentList, PLACEHOLDER_BODY};
use board_comments::app::{sample_comments, BoardPage};
use board_comments::models::comment::Comment;

wasm_bindgen_test_configure!(run_in_browser);

// Helper function to mount into a fresh container
fn create_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

fn texts(container: &web_sys::HtmlElement, selector: &str) -> Vec<String> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
async fn test_mounts_one_block_per_comment() {
    let container = create_container("comments-basic");
    let comments = vec![
        Comment::new("Alice", 5, "Great!"),
        Comment::new("Bob", 3, "Fine"),
    ];

    mount_to(container.clone(), move || view! { <CommentList comments=comments /> });
    sleep(Duration::from_millis(50)).await;

    assert_eq!(texts(&container, ".comment-block").len(), 2);
    assert_eq!(texts(&container, ".username"), vec!["Alice", "Bob"]);
    assert_eq!(texts(&container, ".rating"), vec!["5", "3"]);
    for body in texts(&container, ".comment-body") {
        assert_eq!(body, PLACEHOLDER_BODY);
    }
}

#[wasm_bindgen_test]
async fn test_empty_list_mounts_no_blocks() {
    let container = create_container("comments-empty");

    mount_to(container.clone(), || view! { <CommentList comments=Vec::<Comment>::new() /> });
    sleep(Duration::from_millis(50)).await;

    assert!(texts(&container, ".comment-block").is_empty());
}

#[wasm_bindgen_test]
async fn test_rerenders_when_comments_change() {
    let container = create_container("comments-reactive");
    let comments = create_rw_signal(vec![Comment::new("Alice", 5, "Great!")]);
    let show_body = create_rw_signal(false);

    mount_to(container.clone(), move || {
        view! { <CommentList comments=comments show_body=show_body /> }
    });
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".username"), vec!["Alice"]);

    comments.update(|list| list.push(Comment::new("Bob", 1, "Nope")));
    show_body.set(true);
    sleep(Duration::from_millis(50)).await;

    assert_eq!(texts(&container, ".username"), vec!["Alice", "Bob"]);
    assert_eq!(texts(&container, ".comment-body"), vec!["Great!", "Nope"]);
}

#[wasm_bindgen_test]
async fn test_board_checkbox_toggles_comment_text() {
    let container = create_container("board-page");

    mount_to(container.clone(), || view! { <BoardPage /> });
    sleep(Duration::from_millis(50)).await;

    let checkbox = container
        .query_selector("input[type=checkbox]")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert!(!checkbox.checked());
    for body in texts(&container, ".comment-body") {
        assert_eq!(body, PLACEHOLDER_BODY);
    }

    checkbox.click();
    sleep(Duration::from_millis(50)).await;

    assert!(checkbox.checked());
    let expected: Vec<String> = sample_comments().into_iter().map(|c| c.body).collect();
    assert_eq!(texts(&container, ".comment-body"), expected);
}
