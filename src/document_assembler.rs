//! # 文档组装器
//!
//! 将 `Profile` 投影为有序的内容块序列，作为所有渲染后端的唯一
//! 数据来源。全部取舍逻辑（条件部分、链接有无、地址有无）集中在
//! 这里，渲染器只做逐块映射，不得自行重新推导。

use crate::types::{ContentBlock, LinkEntry, Profile};

// =================================================================================
// 1. 常量定义
// =================================================================================

const SECTION_SUMMARY: &str = "Profile Summary";
const SECTION_PROJECTS: &str = "Projects";
const SECTION_EDUCATION: &str = "Education";
const SECTION_CERTIFICATIONS: &str = "Certifications";
const SECTION_HACKATHONS: &str = "Hackathons";
const SECTION_SKILLS: &str = "Skills";
const SECTION_HOBBIES: &str = "Hobbies";
const SECTION_EXPERIENCE: &str = "Experience / Personal Projects";

const LABEL_EMAIL: &str = "Email";
const LABEL_PHONE: &str = "Phone";
const LABEL_ADDRESS: &str = "Address";
const LABEL_GITHUB: &str = "GitHub";
const LABEL_LINKEDIN: &str = "LinkedIn";
const LABEL_WEBSITE: &str = "Website";

// =================================================================================
// 2. 公共 API
// =================================================================================

/// 文档组装的主入口函数。
///
/// 按固定顺序产出内容块：标题/联系方式 → 链接 → 简介 → 项目 →
/// 教育经历 → 证书（启用且非空）→ 黑客马拉松（启用且非空）→
/// 技能（非空）→ 爱好（非空）→ 工作经历。
///
/// 条件部分在未满足条件时完全缺席：既没有标题块也没有内容块。
/// 该函数是纯函数，没有自身的失败模式。
#[must_use]
pub fn assemble_document(profile: &Profile) -> Vec<ContentBlock> {
    let mut blocks: Vec<ContentBlock> = Vec::new();

    push_identity_blocks(profile, &mut blocks);
    push_link_blocks(profile, &mut blocks);

    push_text_section(SECTION_SUMMARY, &profile.summary, &mut blocks);
    push_project_blocks(profile, &mut blocks);
    push_list_section(SECTION_EDUCATION, &profile.education, false, &mut blocks);

    // 带开关的部分：开关关闭或列表为空时整体缺席
    if profile.certifications_enabled {
        push_list_section(
            SECTION_CERTIFICATIONS,
            &profile.certifications,
            true,
            &mut blocks,
        );
    }
    if profile.hackathons_enabled {
        push_list_section(SECTION_HACKATHONS, &profile.hackathons, true, &mut blocks);
    }

    push_list_section(SECTION_SKILLS, &profile.skills, true, &mut blocks);
    push_list_section(SECTION_HOBBIES, &profile.hobbies, true, &mut blocks);

    push_text_section(SECTION_EXPERIENCE, &profile.experience, &mut blocks);

    blocks
}

// =================================================================================
// 3. 各区域的组装逻辑
// =================================================================================

/// 组装标题与联系方式块。邮箱和电话行总是产出，地址行仅在存在时产出。
fn push_identity_blocks(profile: &Profile, blocks: &mut Vec<ContentBlock>) {
    blocks.push(ContentBlock::Title {
        text: profile.name.clone(),
    });
    blocks.push(ContentBlock::ContactLine {
        label: LABEL_EMAIL.to_string(),
        text: profile.email.clone(),
    });
    blocks.push(ContentBlock::ContactLine {
        label: LABEL_PHONE.to_string(),
        text: profile.phone.clone(),
    });
    if let Some(address) = &profile.mailing_address {
        blocks.push(ContentBlock::ContactLine {
            label: LABEL_ADDRESS.to_string(),
            text: address.clone(),
        });
    }
}

/// 组装链接块，固定顺序：GitHub → LinkedIn → 个人网站 → 自定义链接。
fn push_link_blocks(profile: &Profile, blocks: &mut Vec<ContentBlock>) {
    let standard_links = [
        (LABEL_GITHUB, profile.github.as_ref()),
        (LABEL_LINKEDIN, profile.linkedin.as_ref()),
        (LABEL_WEBSITE, profile.website.as_ref()),
    ];
    for (label, url) in standard_links {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            blocks.push(ContentBlock::LinkItem {
                text: label.to_string(),
                url: url.clone(),
            });
        }
    }
    for LinkEntry { label, url } in &profile.extra_links {
        blocks.push(ContentBlock::LinkItem {
            text: label.clone(),
            url: url.clone(),
        });
    }
}

/// 组装项目块。标题总是产出；每个项目恰好产出一个块：
/// 有演示链接时为 `LinkItem`，否则为 `BulletItem`，二者互斥。
fn push_project_blocks(profile: &Profile, blocks: &mut Vec<ContentBlock>) {
    blocks.push(ContentBlock::SectionHeader {
        text: SECTION_PROJECTS.to_string(),
    });
    for project in &profile.projects {
        match &project.demo_link {
            Some(link) => blocks.push(ContentBlock::LinkItem {
                text: project.title.clone(),
                url: link.clone(),
            }),
            None => blocks.push(ContentBlock::BulletItem {
                text: project.title.clone(),
            }),
        }
    }
}

/// 组装一个自由文本部分。标题总是产出，段落仅在文本非空时产出。
fn push_text_section(title: &str, text: &str, blocks: &mut Vec<ContentBlock>) {
    blocks.push(ContentBlock::SectionHeader {
        text: title.to_string(),
    });
    if !text.is_empty() {
        blocks.push(ContentBlock::Paragraph {
            text: text.to_string(),
        });
    }
}

/// 组装一个列表部分。
///
/// `skip_when_empty` 为 true 时（条件部分），列表为空则整体缺席；
/// 为 false 时（教育经历）标题总是产出。
fn push_list_section(
    title: &str,
    items: &[String],
    skip_when_empty: bool,
    blocks: &mut Vec<ContentBlock>,
) {
    if skip_when_empty && items.is_empty() {
        return;
    }
    blocks.push(ContentBlock::SectionHeader {
        text: title.to_string(),
    });
    for item in items {
        blocks.push(ContentBlock::BulletItem { text: item.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectEntry;

    fn section_blocks<'a>(blocks: &'a [ContentBlock], title: &str) -> Vec<&'a ContentBlock> {
        let start = blocks.iter().position(|b| {
            matches!(b, ContentBlock::SectionHeader { text } if text == title)
        });
        let Some(start) = start else {
            return Vec::new();
        };
        blocks[start + 1..]
            .iter()
            .take_while(|b| !matches!(b, ContentBlock::SectionHeader { .. }))
            .collect()
    }

    fn has_header(blocks: &[ContentBlock], title: &str) -> bool {
        blocks
            .iter()
            .any(|b| matches!(b, ContentBlock::SectionHeader { text } if text == title))
    }

    #[test]
    fn test_project_variants_are_mutually_exclusive() {
        let profile = Profile {
            name: "Jane Doe".to_string(),
            projects: vec![
                ProjectEntry::new("App", None),
                ProjectEntry::new("Site", Some("https://demo.io".to_string())),
            ],
            ..Default::default()
        };
        let blocks = assemble_document(&profile);
        let section = section_blocks(&blocks, SECTION_PROJECTS);
        assert_eq!(
            section,
            vec![
                &ContentBlock::BulletItem {
                    text: "App".to_string()
                },
                &ContentBlock::LinkItem {
                    text: "Site".to_string(),
                    url: "https://demo.io".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_disabled_certifications_fully_absent() {
        let profile = Profile {
            certifications: vec!["AWS Certified Practitioner".to_string()],
            certifications_enabled: false,
            ..Default::default()
        };
        let blocks = assemble_document(&profile);
        assert!(!has_header(&blocks, SECTION_CERTIFICATIONS));
    }

    #[test]
    fn test_enabled_but_empty_certifications_fully_absent() {
        let profile = Profile {
            certifications_enabled: true,
            ..Default::default()
        };
        let blocks = assemble_document(&profile);
        assert!(!has_header(&blocks, SECTION_CERTIFICATIONS));
    }

    #[test]
    fn test_empty_skills_and_hobbies_fully_absent() {
        let blocks = assemble_document(&Profile::default());
        assert!(!has_header(&blocks, SECTION_SKILLS));
        assert!(!has_header(&blocks, SECTION_HOBBIES));
    }

    #[test]
    fn test_address_only_when_present() {
        let without = assemble_document(&Profile::default());
        assert!(!without.iter().any(
            |b| matches!(b, ContentBlock::ContactLine { label, .. } if label == LABEL_ADDRESS)
        ));

        let with = assemble_document(&Profile {
            mailing_address: Some("12 Main St".to_string()),
            ..Default::default()
        });
        assert!(with.iter().any(
            |b| matches!(b, ContentBlock::ContactLine { label, .. } if label == LABEL_ADDRESS)
        ));
    }

    #[test]
    fn test_link_blocks_fixed_order() {
        let profile = Profile {
            github: Some("https://github.com/jane".to_string()),
            linkedin: Some("https://linkedin.com/in/jane".to_string()),
            website: Some("https://jane.dev".to_string()),
            extra_links: vec![LinkEntry {
                label: "blog".to_string(),
                url: "https://blog.jane.dev".to_string(),
            }],
            ..Default::default()
        };
        let blocks = assemble_document(&profile);
        let labels: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::LinkItem { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Website", "blog"]);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let profile = Profile {
            name: "Jane Doe".to_string(),
            summary: "Engineer.".to_string(),
            projects: vec![ProjectEntry::new("App", None)],
            education: vec!["BSc".to_string()],
            certifications: vec!["Cert".to_string()],
            certifications_enabled: true,
            hackathons: vec!["Hack 2023".to_string()],
            hackathons_enabled: true,
            skills: vec!["Rust".to_string()],
            hobbies: vec!["Reading".to_string()],
            experience: "Work.".to_string(),
            ..Default::default()
        };
        let blocks = assemble_document(&profile);
        let headers: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::SectionHeader { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            vec![
                SECTION_SUMMARY,
                SECTION_PROJECTS,
                SECTION_EDUCATION,
                SECTION_CERTIFICATIONS,
                SECTION_HACKATHONS,
                SECTION_SKILLS,
                SECTION_HOBBIES,
                SECTION_EXPERIENCE,
            ]
        );
    }

    #[test]
    fn test_empty_summary_has_header_without_paragraph() {
        let blocks = assemble_document(&Profile::default());
        let section = section_blocks(&blocks, SECTION_SUMMARY);
        assert!(section.is_empty());
    }
}
