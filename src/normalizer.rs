//! # 档案规范化器
//!
//! 将原始的自由文本字段转换为规范化的 `Profile` 记录。
//!
//! 所有操作都是全函数：空输入、空白输入和长度不匹配的列表
//! 都退化为空字段或缺失字段，绝不失败。

use tracing::warn;

use crate::{
    link_processor::LinkStore,
    types::{CanonicalLinkKey, NormalizedProfile, Profile, ProjectEntry, RawProfileInput},
    utils::normalize_text_whitespace,
};

/// 规范化一个链接地址。
///
/// 修剪首尾空白；空输入产生空输出（字段视为缺失）。已经以
/// `http://` 或 `https://` 开头的值原样返回，其余值统一补全
/// `https://` 前缀（无论是否以 `www.` 开头）。
///
/// 该操作是幂等的：`normalize_url(normalize_url(x)) == normalize_url(x)`。
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}

/// 将多行文本块拆分为条目列表。
///
/// 按换行拆分，修剪每一行，丢弃修剪后为空的行，保留其余行的顺序。
#[must_use]
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 将项目标题与演示链接按位置索引配对。
///
/// 对 `0..titles.len()` 中的每个索引 `i`，若 `i < links.len()` 则将
/// `titles[i]` 与 `links[i]` 配对，否则该项目没有链接。超出标题数量
/// 的链接被静默丢弃。
///
/// 这是一个刻意的位置契约：两个来源列表必须由调用方按行保持同步，
/// 本函数不做任何语义匹配。
#[must_use]
pub fn pair_by_index(titles: &[String], links: &[String]) -> Vec<ProjectEntry> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let demo_link = links
                .get(i)
                .filter(|link| !link.is_empty())
                .map(String::clone);
            ProjectEntry::new(title.clone(), demo_link)
        })
        .collect()
}

/// 档案规范化的主入口函数。
///
/// # 参数
/// * `raw` - 从输入文件解析出的原始字段。
///
/// # 返回
/// 规范化后的档案，以及规范化过程中产生的警告信息列表。
/// 该函数从不失败。
#[must_use]
pub fn normalize_profile(raw: &RawProfileInput) -> NormalizedProfile {
    let mut warnings: Vec<String> = Vec::new();

    // --- 链接字段经由 LinkStore 统一规范化 ---
    let mut link_store = LinkStore::new();
    let _ = link_store.add("github", &raw.github);
    let _ = link_store.add("linkedin", &raw.linkedin);
    let _ = link_store.add("website", &raw.website);
    link_store.load_from_raw(&raw.links);
    link_store.deduplicate_values();

    // --- 项目与演示链接按行配对 ---
    let titles = split_lines(&raw.projects);
    let demo_links: Vec<String> = split_lines(&raw.demo_links)
        .iter()
        .map(|link| normalize_url(link))
        .collect();

    if demo_links.len() > titles.len() {
        let message = format!(
            "提供了 {} 条演示链接，但只有 {} 个项目，多余的链接已被忽略。",
            demo_links.len(),
            titles.len()
        );
        warn!("{message}");
        warnings.push(message);
    }

    let projects = pair_by_index(&titles, &demo_links);

    let mailing_address = {
        let address = normalize_text_whitespace(&raw.mailing_address);
        if address.is_empty() { None } else { Some(address) }
    };

    let profile = Profile {
        name: normalize_text_whitespace(&raw.name),
        email: normalize_text_whitespace(&raw.email),
        phone: normalize_text_whitespace(&raw.phone),
        mailing_address,
        github: link_store.get_single_value(&CanonicalLinkKey::GitHub).cloned(),
        linkedin: link_store
            .get_single_value(&CanonicalLinkKey::LinkedIn)
            .cloned(),
        website: link_store
            .get_single_value(&CanonicalLinkKey::Website)
            .cloned(),
        extra_links: link_store.custom_links(),
        summary: raw.summary.trim().to_string(),
        projects,
        education: split_lines(&raw.education),
        certifications: split_lines(&raw.certifications),
        hackathons: split_lines(&raw.hackathons),
        skills: split_lines(&raw.skills),
        hobbies: split_lines(&raw.hobbies),
        certifications_enabled: raw.certifications_enabled,
        hackathons_enabled: raw.hackathons_enabled,
        experience: raw.experience.trim().to_string(),
    };

    NormalizedProfile { profile, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("  "), "");
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("www.example.com"), "https://www.example.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
    }

    #[test]
    fn test_normalize_url_idempotent() {
        for raw in ["", "  ", "example.com", "www.x.dev", "http://x.com", "https://x.com"] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once);
        }
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\n\n b \n"), vec!["a", "b"]);
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("\n  \n\t\n"), Vec::<String>::new());
        assert_eq!(split_lines("one\ntwo\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_pair_by_index_missing_links() {
        let titles = vec!["P1".to_string(), "P2".to_string(), "P3".to_string()];
        let links = vec!["L1".to_string()];
        let paired = pair_by_index(&titles, &links);
        assert_eq!(
            paired,
            vec![
                ProjectEntry::new("P1", Some("L1".to_string())),
                ProjectEntry::new("P2", None),
                ProjectEntry::new("P3", None),
            ]
        );
    }

    #[test]
    fn test_pair_by_index_excess_links_dropped() {
        let titles = vec!["P1".to_string()];
        let links = vec!["L1".to_string(), "L2".to_string()];
        let paired = pair_by_index(&titles, &links);
        assert_eq!(paired, vec![ProjectEntry::new("P1", Some("L1".to_string()))]);
    }

    #[test]
    fn test_normalize_profile_basic() {
        let raw = RawProfileInput {
            name: "  Jane   Doe ".to_string(),
            email: "jane@example.com".to_string(),
            github: "github.com/jane".to_string(),
            projects: "App\nSite".to_string(),
            demo_links: "\ndemo.io\n".to_string(),
            skills: "Rust\n\n Parsing \n".to_string(),
            ..Default::default()
        };
        let normalized = normalize_profile(&raw);
        let profile = &normalized.profile;

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.github.as_deref(), Some("https://github.com/jane"));
        assert_eq!(profile.linkedin, None);
        assert_eq!(profile.mailing_address, None);
        assert_eq!(profile.skills, vec!["Rust", "Parsing"]);
        // 空行在配对之前就已被丢弃，因此唯一的链接落在第一个项目上。
        assert_eq!(
            profile.projects,
            vec![
                ProjectEntry::new("App", Some("https://demo.io".to_string())),
                ProjectEntry::new("Site", None),
            ]
        );
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_normalize_profile_warns_on_excess_links() {
        let raw = RawProfileInput {
            projects: "App".to_string(),
            demo_links: "a.io\nb.io".to_string(),
            ..Default::default()
        };
        let normalized = normalize_profile(&raw);
        assert_eq!(normalized.profile.projects.len(), 1);
        assert_eq!(normalized.warnings.len(), 1);
    }
}
