use leptos::tachys::view::RenderHtml;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::api::parse_comments;
use crate::state::comments::{LOAD_FAILED_MESSAGE, build_entries};

fn render_snapshot(body: &str) -> String {
    let comments = parse_comments("/comments", body).unwrap();
    let mut snapshot = CommentsState::default();
    let token = snapshot.begin();
    snapshot.resolve(token, Ok(build_entries(&comments)));
    render_state(snapshot)
}

fn render_state(snapshot: CommentsState) -> String {
    Owner::new().with(|| {
        let state = RwSignal::new(snapshot);
        view! { <CommentsList state/> }.to_html()
    })
}

#[test]
fn single_comment_renders_one_list_item() {
    let html = render_snapshot(
        r#"{ "comments": [{ "comment": "hi", "username": "bob", "imageUrl": null, "imageLabels": null }] }"#,
    );
    assert_eq!(html.matches("<li").count(), 1);
    assert!(html.contains("hi - by bob"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<p"));
}

#[test]
fn list_items_match_comment_count_and_order() {
    let html = render_snapshot(
        r#"{ "comments": [
            { "comment": "one", "username": "a" },
            { "comment": "two", "username": "b", "imageUrl": "/serve/2" },
            { "comment": "three", "username": "c" }
        ] }"#,
    );
    assert_eq!(html.matches("<li").count(), 3);
    let one = html.find("one - by a").unwrap();
    let two = html.find("two - by b").unwrap();
    let three = html.find("three - by c").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn null_image_url_renders_no_image_even_with_labels() {
    let html = render_snapshot(
        r#"{ "comments": [{ "comment": "x", "username": "y", "imageUrl": null, "imageLabels": ["Dog"] }] }"#,
    );
    assert!(!html.contains("<img"));
    assert!(!html.contains("This is a/an"));
}

#[test]
fn caption_follows_image_which_follows_item() {
    let html = render_snapshot(
        r#"{ "comments": [{
            "comment": "look",
            "username": "ada",
            "imageUrl": "/serve/k",
            "imageLabels": ["Cat", "Whiskers"]
        }] }"#,
    );
    let item = html.find("<li").unwrap();
    let image = html.find("<img").unwrap();
    let caption = html.find("This is a/an: Cat, Whiskers image").unwrap();
    assert!(item < image && image < caption);
    assert!(html.contains(r#"src="/serve/k""#));
}

#[test]
fn empty_snapshot_renders_no_items() {
    let html = render_snapshot(r#"{ "comments": [] }"#);
    assert_eq!(html.matches("<li").count(), 0);
}

#[test]
fn failed_load_renders_inline_message_only() {
    let mut snapshot = CommentsState::default();
    let token = snapshot.begin();
    snapshot.resolve(token, Err(LOAD_FAILED_MESSAGE.to_owned()));
    let html = render_state(snapshot);
    assert!(html.contains(LOAD_FAILED_MESSAGE));
    assert_eq!(html.matches("<li").count(), 0);
}
