use super::*;

#[test]
fn test_course_deserializes_catalog_field_names() {
    let json = r#"{
        "dept": "Science",
        "subj": "Physics",
        "lvl": "500",
        "course_no": "PHY530",
        "st": "Physics 530",
        "lt": "Electricity and Magnetism",
        "desc": "Fields and circuits.",
        "eli": "Upper classes",
        "pre": "PHY430|PHY440/MAT320",
        "prereq_full": "PHY430 or PHY440; MAT320 concurrently"
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert_eq!(course.course_no, "PHY530");
    assert_eq!(course.long_title, "Electricity and Magnetism");
    assert_eq!(course.description, "Fields and circuits.");
    assert_eq!(course.eligibility, "Upper classes");
    assert_eq!(course.requirements.as_deref(), Some("PHY430|PHY440/MAT320"));
    assert_eq!(course.prerequisites_full, "PHY430 or PHY440; MAT320 concurrently");
}

#[test]
fn test_course_null_pre_is_none() {
    let json = r#"{"course_no": "PEA000", "pre": null}"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert!(course.requirements.is_none());
    assert_eq!(course.long_title, "");
}

#[test]
fn test_subject_prefix() {
    assert_eq!(Course::new("MAT310", None).subject(), "MAT");
    assert_eq!(subject_of("AB"), "AB");
}

#[test]
fn test_info_copies_display_fields() {
    let mut course = Course::new("CHE310", Some("PEA000"));
    course.long_title = "Chemistry".to_string();
    course.prerequisites_full = "None".to_string();
    let info = course.info();
    assert_eq!(info.course_no, "CHE310");
    assert_eq!(info.long_title, "Chemistry");
    assert_eq!(info.prerequisites_full, "None");
}

#[test]
fn test_admission_sentinel() {
    assert!(is_admission("PEA000"));
    assert!(!is_admission("PEA001"));
    assert_eq!(ADMISSION_COURSE.len(), COURSE_CODE_LEN);
}
