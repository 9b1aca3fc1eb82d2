use draft_watch::page::html::element_text_by_class;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>League Home</title><style>.alert-info { color: blue; }</style></head>
<body>
  <div class="alert alert-info" role="alert">
    <strong>The 2025 Draft</strong> is currently open.
    The Giants (bigdaddybrett05) are on the clock.
    <br/>
    Next pick due on 11/13/2025 at 8:56 PM PST.
  </div>
  <div class="alert-info">second box</div>
</body>
</html>"#;

#[test]
fn joins_stripped_text_nodes_without_separator() {
    let text = element_text_by_class(PAGE, "div", "alert-info").expect("element found");

    assert_eq!(
        text,
        "The 2025 Draftis currently open.\n    The Giants (bigdaddybrett05) are on the clock.\
         Next pick due on 11/13/2025 at 8:56 PM PST."
    );
}

#[test]
fn returns_none_without_matching_class() {
    assert!(element_text_by_class(PAGE, "div", "alert-warning").is_none());
}

#[test]
fn class_must_match_whole_token() {
    let html = r#"<div class="alert-information">nope</div><div class="x alert-info">yes</div>"#;

    assert_eq!(element_text_by_class(html, "div", "alert-info").as_deref(), Some("yes"));
}

#[test]
fn nested_same_name_elements_are_included() {
    let html = r#"<div class="alert-info">outer <div>inner</div> tail</div><div>after</div>"#;

    assert_eq!(
        element_text_by_class(html, "div", "alert-info").as_deref(),
        Some("outerinnertail")
    );
}

#[test]
fn decodes_entities_and_skips_comments_and_scripts() {
    let html = r#"<p class='alert-info'>Smith&nbsp;&amp; Sons<!-- hidden --><script>var x = 1;</script> &#39;25</p>"#;

    assert_eq!(
        element_text_by_class(html, "p", "alert-info").as_deref(),
        Some("Smith & Sons'25")
    );
}

#[test]
fn unclosed_element_runs_to_end_of_document() {
    let html = r#"<div class="alert-info">Giants are on the clock."#;

    assert_eq!(
        element_text_by_class(html, "div", "alert-info").as_deref(),
        Some("Giants are on the clock.")
    );
}

#[test]
fn tag_and_attribute_names_are_case_insensitive() {
    let html = r#"<DIV CLASS="alert-info">Upper</DIV>"#;

    assert_eq!(element_text_by_class(html, "div", "alert-info").as_deref(), Some("Upper"));
}

#[test]
fn other_elements_carrying_the_class_are_skipped() {
    let html = r#"<span class="badge alert-info">New</span><div class="alert-info">status</div>"#;

    assert_eq!(element_text_by_class(html, "div", "alert-info").as_deref(), Some("status"));
    assert_eq!(element_text_by_class(html, "span", "alert-info").as_deref(), Some("New"));
}

#[test]
fn bare_less_than_in_text_is_kept() {
    let html = r#"<div class="alert-info">pick due in < 5 min</div><div>after</div>"#;

    assert_eq!(
        element_text_by_class(html, "div", "alert-info").as_deref(),
        Some("pick due in < 5 min")
    );
}

#[test]
fn less_than_inside_script_does_not_hide_closing_tag() {
    let html = r#"<div class="alert-info">x<script>if(a<b){}</script>y</div>"#;

    assert_eq!(element_text_by_class(html, "div", "alert-info").as_deref(), Some("xy"));
}

#[test]
fn script_before_element_cannot_fake_a_match() {
    let html = r#"<script>var s = '<div class="alert-info">fake</div>';</script><div class="alert-info">real</div>"#;

    assert_eq!(element_text_by_class(html, "div", "alert-info").as_deref(), Some("real"));
}
