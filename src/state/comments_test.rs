use super::*;

fn comment(text: &str, username: &str, image_url: Option<&str>, labels: Option<&[&str]>) -> Comment {
    Comment {
        comment_text: text.to_owned(),
        username: username.to_owned(),
        image_url: image_url.map(str::to_owned),
        image_labels: labels.map(|ls| ls.iter().map(|l| (*l).to_owned()).collect()),
    }
}

// =============================================================
// comment_line / labels_caption
// =============================================================

#[test]
fn comment_line_joins_text_and_author() {
    assert_eq!(comment_line(&comment("hi", "bob", None, None)), "hi - by bob");
}

#[test]
fn comment_line_substitutes_anonymous_for_empty_username() {
    assert_eq!(
        comment_line(&comment("hello", "", None, None)),
        "hello - by Anonymous User"
    );
}

#[test]
fn labels_caption_single_label() {
    assert_eq!(
        labels_caption(&["Cat".to_owned()]),
        Some("This is a/an: Cat image".to_owned())
    );
}

#[test]
fn labels_caption_lists_all_labels_without_trailing_comma() {
    let labels = ["Cat".to_owned(), "Mammal".to_owned(), "Whiskers".to_owned()];
    let caption = labels_caption(&labels).unwrap();
    assert_eq!(caption, "This is a/an: Cat, Mammal, Whiskers image");
    assert!(!caption.contains(", image"));
    assert!(caption.ends_with("image"));
}

#[test]
fn labels_caption_empty_is_none() {
    assert_eq!(labels_caption(&[]), None);
}

// =============================================================
// build_entries
// =============================================================

#[test]
fn build_entries_single_plain_comment() {
    let entries = build_entries(&[comment("hi", "bob", None, None)]);
    assert_eq!(
        entries,
        vec![CommentEntry { line: "hi - by bob".to_owned(), image: None }]
    );
}

#[test]
fn build_entries_one_row_per_comment_in_order() {
    let comments = [
        comment("first", "a", None, None),
        comment("second", "b", Some("/img/2"), None),
        comment("third", "c", None, None),
    ];
    let lines: Vec<String> = build_entries(&comments).into_iter().map(|e| e.line).collect();
    assert_eq!(lines, ["first - by a", "second - by b", "third - by c"]);
}

#[test]
fn build_entries_empty_snapshot_has_no_rows() {
    assert!(build_entries(&[]).is_empty());
}

#[test]
fn null_image_url_never_yields_image() {
    let entries = build_entries(&[comment("x", "y", None, None)]);
    assert!(entries[0].image.is_none());
}

#[test]
fn image_with_labels_gets_caption() {
    let entries = build_entries(&[comment("x", "y", Some("/serve/k"), Some(&["Dog", "Pet"][..]))]);
    assert_eq!(
        entries[0].image,
        Some(CommentImage {
            url: "/serve/k".to_owned(),
            caption: Some("This is a/an: Dog, Pet image".to_owned()),
        })
    );
}

#[test]
fn image_with_empty_labels_has_no_caption() {
    let entries = build_entries(&[comment("x", "y", Some("/serve/k"), Some(&[][..]))]);
    let image = entries[0].image.as_ref().unwrap();
    assert!(image.caption.is_none());
}

#[test]
fn image_without_labels_has_no_caption() {
    let entries = build_entries(&[comment("x", "y", Some("/serve/k"), None)]);
    assert_eq!(entries[0].image.as_ref().unwrap().caption, None);
}

#[test]
fn labels_without_image_are_not_rendered() {
    let entries = build_entries(&[comment("x", "y", None, Some(&["Dog"][..]))]);
    assert!(entries[0].image.is_none());
}
