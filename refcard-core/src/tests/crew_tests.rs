use super::*;

fn official(role: &str, name: &str) -> Official {
    Official::named(name).with_role(role)
}

#[test]
fn test_classify_roles() {
    assert_eq!(RoleKind::classify("Referee"), RoleKind::Center);
    assert_eq!(RoleKind::classify("Center Ref"), RoleKind::Center);
    assert_eq!(RoleKind::classify("Assistant Referee"), RoleKind::Assistant);
    assert_eq!(RoleKind::classify("AR1"), RoleKind::Assistant);
    assert_eq!(RoleKind::classify("Jr. Referee"), RoleKind::Junior);
    assert_eq!(RoleKind::classify("4th Official"), RoleKind::Fourth);
    assert_eq!(RoleKind::classify(""), RoleKind::Unknown);
    assert_eq!(RoleKind::classify("Observer"), RoleKind::Unknown);
}

#[test]
fn test_single_official() {
    let crew = vec![official("", "Ann")];
    assert_eq!(infer_referee_role_labels(&crew), vec!["Referee"]);
    assert_eq!(assign_slots(&crew), ["Ann".to_string(), String::new(), String::new()]);
}

#[test]
fn test_two_unmarked_officials_are_dual() {
    let crew = vec![official("", "Ann"), official("", "Bob")];
    assert_eq!(
        infer_referee_role_labels(&crew),
        vec!["Senior Referee", "Junior Referee"]
    );
}

#[test]
fn test_dual_junior_listed_first() {
    let crew = vec![official("Junior", "Bob"), official("Referee", "Ann")];
    assert_eq!(
        infer_referee_role_labels(&crew),
        vec!["Junior Referee", "Senior Referee"]
    );
    assert_eq!(assign_slots(&crew)[0], "Ann");
    assert_eq!(assign_slots(&crew)[1], "Bob");
}

#[test]
fn test_two_with_assistant_marker_uses_three_person_labels() {
    let crew = vec![official("AR", "Bob"), official("Referee", "Ann")];
    assert_eq!(infer_referee_role_labels(&crew), vec!["AR1", "Referee"]);
}

#[test]
fn test_three_person_crew() {
    let crew = vec![
        official("Referee", "Ann"),
        official("AR1", "Bob"),
        official("AR2", "Cy"),
    ];
    assert_eq!(infer_referee_role_labels(&crew), vec!["Referee", "AR1", "AR2"]);
    assert_eq!(
        assign_slots(&crew),
        ["Ann".to_string(), "Bob".to_string(), "Cy".to_string()]
    );
}

#[test]
fn test_center_found_by_role_not_position() {
    let crew = vec![
        official("AR", "Bob"),
        official("AR", "Cy"),
        official("Center", "Ann"),
    ];
    let labeled = labeled_crew(&crew);
    assert_eq!(labeled[0].0, "Referee");
    assert_eq!(labeled[0].1.name, "Ann");
    assert_eq!(labeled[1].1.name, "Bob");
    assert_eq!(labeled[2].1.name, "Cy");
}

#[test]
fn test_large_crew_falls_back_to_appearance_order() {
    let crew = vec![
        official("4th", "Dee"),
        official("", "Ann"),
        official("", "Bob"),
        official("", "Cy"),
        official("", "Eve"),
    ];
    assert_eq!(
        infer_referee_role_labels(&crew),
        vec!["4th Official", "Referee", "AR1", "AR2", "Official 4"]
    );
    assert_eq!(
        assign_slots(&crew),
        ["Ann".to_string(), "Bob".to_string(), "Cy".to_string()]
    );
}

#[test]
fn test_empty_crew() {
    assert!(infer_referee_role_labels(&[]).is_empty());
    assert!(labeled_crew(&[]).is_empty());
    assert_eq!(assign_slots(&[]), <[String; 3]>::default());
}
