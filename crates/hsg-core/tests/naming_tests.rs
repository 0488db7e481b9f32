use hsg_core::naming;

#[test]
fn class_names_survive_promoted_inline_refs() {
    assert_eq!(
        naming::normalize_class_name("inline_response_200_1"),
        "InlineResponse2001"
    );
    assert_eq!(naming::normalize_class_name("job.status-report"), "Jobstatusreport");
}

#[test]
fn primitive_collisions_get_a_suffix() {
    assert_eq!(naming::normalize_class_name("string"), "String_");
    assert_eq!(naming::normalize_class_name("Bool"), "Bool_");
    assert_eq!(naming::normalize_class_name("Widget"), "Widget");
}

#[test]
fn reserved_words_escape_through_the_substitute_table() {
    assert_eq!(naming::escape_reserved_word("type"), "ty");
    assert_eq!(naming::escape_reserved_word("data"), "payload");
    assert_eq!(naming::escape_reserved_word("where"), "_where");
    assert_eq!(naming::escape_reserved_word("name"), "name");
}

#[test]
fn literals_sanitize_specials_with_tick_prefix() {
    assert_eq!(naming::sanitize_literal("a+b"), "a'Plusb");
    assert_eq!(naming::sanitize_literal("job_id"), "job_id");
    assert_eq!(naming::sanitize_literal("_case"), "case");
}

#[test]
fn field_names_compose_prefix_and_preserved_pascal() {
    let prefix = naming::field_prefix("NotFound");
    assert_eq!(prefix, "notFound");
    assert_eq!(
        format!("{prefix}{}", naming::pascal_preserving("job_id")),
        "notFoundJobId"
    );
}
