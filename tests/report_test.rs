use changelog_tags::report::ValidationWarning;

// ============================================================================
// ValidationWarning Display Tests
// ============================================================================

#[test]
fn test_version_without_tag_display() {
    let warning = ValidationWarning::VersionWithoutTag {
        version: "1.1.0".to_string(),
        expected_tag: "v1.1.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("has no tag"),
        "Message should contain 'has no tag', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("v1.1.0"),
        "Message should contain expected tag 'v1.1.0', got: {}",
        display_msg
    );
}

#[test]
fn test_tag_without_version_display() {
    let warning = ValidationWarning::TagWithoutVersion {
        version: "2.0.0".to_string(),
        tag: "release-2.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("no changelog entry"),
        "Message should contain 'no changelog entry', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("release-2.0.0"),
        "Message should contain tag 'release-2.0.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("'2.0.0'"),
        "Message should contain version '2.0.0', got: {}",
        display_msg
    );
}
