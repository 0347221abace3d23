use super::*;

#[test]
fn result_label_pluralizes() {
    assert_eq!(result_label(0), "No ports match your search");
    assert_eq!(result_label(1), "1 port found");
    assert_eq!(result_label(9), "9 ports found");
}

#[test]
fn layout_defaults_to_list() {
    assert_eq!(Layout::default(), Layout::List);
}
