use crate::types::Profile;

/// 对规范化后的档案进行验证。
///
/// 验证是建议性的：发现的问题以字符串列表返回，由调用方决定
/// 是否将其视为致命错误。本函数从不中断处理流程。
///
/// # 参数
///
/// * `profile` - 规范化后的档案记录。
///
/// # 返回
///
/// * `Ok(())` - 如果所有验证均通过。
/// * `Err(Vec<String>)` - 如果发现任何问题。
pub fn validate_profile(profile: &Profile) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_identity(profile, &mut errors);

    validate_sections(profile, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// 验证身份与联系方式的完整性。
fn validate_identity(profile: &Profile, errors: &mut Vec<String>) {
    if profile.name.is_empty() {
        errors.push("档案中未包含姓名信息。".to_string());
    }
    if !profile.has_contact() {
        errors.push("档案中未包含任何联系方式 (邮箱和电话均为空)。".to_string());
    }
}

/// 验证各内容部分的一致性。
fn validate_sections(profile: &Profile, errors: &mut Vec<String>) {
    if !profile.has_body_content() {
        errors.push("档案正文为空，没有可以渲染的内容部分。".to_string());
    }

    if profile.certifications_enabled && profile.certifications.is_empty() {
        errors.push("已启用证书部分，但证书列表为空。".to_string());
    }
    if profile.hackathons_enabled && profile.hackathons.is_empty() {
        errors.push("已启用黑客马拉松部分，但对应列表为空。".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectEntry;

    #[test]
    fn test_empty_profile_reports_all_problems() {
        let errors = validate_profile(&Profile::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_minimal_valid_profile() {
        let profile = Profile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            projects: vec![ProjectEntry::new("App", None)],
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_enabled_section_with_empty_list() {
        let profile = Profile {
            name: "Jane Doe".to_string(),
            phone: "+1-555-0100".to_string(),
            summary: "Engineer.".to_string(),
            certifications_enabled: true,
            ..Default::default()
        };
        let errors = validate_profile(&profile).unwrap_err();
        assert_eq!(errors, vec!["已启用证书部分，但证书列表为空。".to_string()]);
    }
}
