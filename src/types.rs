//! 定义了档案处理和文档生成中使用的核心数据类型。

use std::{collections::HashMap, fmt, io, str::FromStr};

use quick_xml::Error as QuickXmlErrorMain;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use thiserror::Error;

//=============================================================================
// 1. 错误枚举
//=============================================================================

/// 定义档案处理和文档生成过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum DocumentError {
    /// HTML 生成错误，通常来自 `quick-xml` 库。
    #[error("生成 HTML 错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// 档案 JSON 解析错误，通常来自 `serde_json` 库。
    #[error("解析档案 JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
    /// 字符串格式化错误。
    #[error("格式错误: {0}")]
    Format(#[from] fmt::Error),
    /// 内部逻辑错误或未明确分类的错误。
    #[error("错误: {0}")]
    Internal(String),
    /// 文件读写等IO错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// 无效的档案输入格式。
    #[error("无效的档案格式: {0}")]
    InvalidProfileFormat(String),
}

impl From<DocumentError> for std::io::Error {
    fn from(err: DocumentError) -> Self {
        std::io::Error::other(err)
    }
}

/// 定义从字符串解析 `CanonicalLinkKey` 时可能发生的错误。
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseCanonicalLinkKeyError(String); // 存储无法解析的原始键字符串

impl fmt::Display for ParseCanonicalLinkKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "未知或无效的链接键: {}", self.0)
    }
}
impl std::error::Error for ParseCanonicalLinkKeyError {}

//=============================================================================
// 2. 格式枚举
//=============================================================================

/// 枚举：表示支持的档案输入格式。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Serialize,
    Deserialize,
    EnumIter,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
#[derive(Default)]
pub enum ProfileFormat {
    /// JSON 格式的档案文件。
    #[default]
    Json,
}

/// 枚举：表示支持的文档输出格式。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Serialize,
    Deserialize,
    EnumIter,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
#[derive(Default)]
pub enum DocumentFormat {
    /// 可下载的 HTML 文档（文档渲染面）。
    #[default]
    Html,
    /// Markdown 摘要（屏幕渲染面）。
    Markdown,
}

//=============================================================================
// 3. 链接键
//=============================================================================

/// 定义链接的规范化键。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalLinkKey {
    /// GitHub 主页。
    GitHub,
    /// LinkedIn 主页。
    LinkedIn,
    /// 个人网站。
    Website,
    /// 用于所有其他未明确定义的自定义链接键。
    Custom(String),
}

impl fmt::Display for CanonicalLinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_name = match self {
            CanonicalLinkKey::GitHub => "GitHub",
            CanonicalLinkKey::LinkedIn => "LinkedIn",
            CanonicalLinkKey::Website => "Website",
            CanonicalLinkKey::Custom(s) => s.as_str(),
        };
        write!(f, "{key_name}")
    }
}

impl FromStr for CanonicalLinkKey {
    type Err = ParseCanonicalLinkKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gh" | "github" => Ok(Self::GitHub),
            "in" | "linkedin" => Ok(Self::LinkedIn),
            "site" | "web" | "homepage" | "website" => Ok(Self::Website),
            custom_key if !custom_key.is_empty() => Ok(Self::Custom(custom_key.to_string())),
            _ => Err(ParseCanonicalLinkKeyError(s.to_string())),
        }
    }
}

//=============================================================================
// 4. 档案内部表示结构
//=============================================================================

/// 表示一个项目条目，标题可选地配有一个演示链接。
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// 项目标题。
    pub title: String,
    /// 可选的演示链接，已经过 URL 规范化。
    pub demo_link: Option<String>,
}

impl ProjectEntry {
    /// 创建一个新的项目条目。
    #[must_use]
    pub fn new(title: impl Into<String>, demo_link: Option<String>) -> Self {
        Self {
            title: title.into(),
            demo_link,
        }
    }
}

/// 表示一个带标签的自定义链接。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// 链接的显示标签。
    pub label: String,
    /// 已规范化的链接地址。
    pub url: String,
}

/// 规范化后的档案记录，是一次文档生成周期的唯一数据源。
///
/// 该结构由规范化器从 `RawProfileInput` 构建，之后不再被修改，
/// 生命周期恰好为一次渲染。
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// 姓名，可能为空。
    pub name: String,
    /// 邮箱，可能为空，不做格式校验。
    pub email: String,
    /// 电话，可能为空，不做格式校验。
    pub phone: String,
    /// 可选的邮寄地址。
    pub mailing_address: Option<String>,
    /// 可选的 GitHub 链接，已经过 URL 规范化。
    pub github: Option<String>,
    /// 可选的 LinkedIn 链接，已经过 URL 规范化。
    pub linkedin: Option<String>,
    /// 可选的个人网站链接，已经过 URL 规范化。
    pub website: Option<String>,
    /// 其余自定义链接，按标签排序。
    #[serde(default)]
    pub extra_links: Vec<LinkEntry>,
    /// 个人简介自由文本，可能为空。
    pub summary: String,
    /// 项目列表，顺序即展示顺序。
    pub projects: Vec<ProjectEntry>,
    /// 教育经历，不含空行。
    pub education: Vec<String>,
    /// 证书列表，不含空行。
    pub certifications: Vec<String>,
    /// 黑客马拉松经历，不含空行。
    pub hackathons: Vec<String>,
    /// 技能列表，不含空行。
    pub skills: Vec<String>,
    /// 爱好列表，不含空行。
    pub hobbies: Vec<String>,
    /// 是否渲染证书部分，与列表是否为空无关。
    pub certifications_enabled: bool,
    /// 是否渲染黑客马拉松部分，与列表是否为空无关。
    pub hackathons_enabled: bool,
    /// 工作经历自由文本。
    pub experience: String,
}

impl Profile {
    /// 判断档案是否包含至少一种联系方式（邮箱或电话）。
    #[must_use]
    pub fn has_contact(&self) -> bool {
        !self.email.is_empty() || !self.phone.is_empty()
    }

    /// 判断档案是否包含可渲染的正文内容。
    ///
    /// 只检查无条件渲染的部分（简介、项目、教育经历、工作经历），
    /// 带开关的部分即使有内容也不足以构成正文。
    #[must_use]
    pub fn has_body_content(&self) -> bool {
        !self.summary.is_empty()
            || !self.projects.is_empty()
            || !self.education.is_empty()
            || !self.experience.is_empty()
    }
}

//=============================================================================
// 5. 输入与处理结构体
//=============================================================================

/// 从输入文件解析出的原始（未规范化）档案字段。
///
/// 所有字段均为可选，缺失时退化为空值；多行字段以换行分隔的
/// 文本块形式给出，由规范化器负责拆分。
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfileInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub mailing_address: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
    /// 额外的链接键值对。键是原始链接标签，值是该标签对应的所有地址。
    pub links: HashMap<String, Vec<String>>,
    pub summary: String,
    /// 项目标题，每行一个。
    pub projects: String,
    /// 演示链接，每行一个，与项目标题按行号对应。
    pub demo_links: String,
    /// 教育经历，每行一条。
    pub education: String,
    /// 证书，每行一条。
    pub certifications: String,
    /// 黑客马拉松经历，每行一条。
    pub hackathons: String,
    /// 技能，每行一条。
    pub skills: String,
    /// 爱好，每行一条。
    pub hobbies: String,
    pub certifications_enabled: bool,
    pub hackathons_enabled: bool,
    pub experience: String,
}

/// 存储规范化后的档案数据。
/// 这是规范化阶段的主要输出，也是组装和生成阶段的主要输入。
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    /// 规范化后的档案记录。
    pub profile: Profile,
    /// 规范化过程中产生的警告信息列表。
    #[serde(default)]
    pub warnings: Vec<String>,
}

//=============================================================================
// 6. 内容块
//=============================================================================

/// 渲染器无关的文档内容单元。
///
/// 组装器将 `Profile` 投影为内容块序列，所有渲染后端消费同一份
/// 序列，不得自行重新推导取舍逻辑。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    /// 文档标题（姓名）。
    Title { text: String },
    /// 联系方式行。
    ContactLine { label: String, text: String },
    /// 部分标题。
    SectionHeader { text: String },
    /// 无链接的列表项。
    BulletItem { text: String },
    /// 带链接的列表项。
    LinkItem { text: String, url: String },
    /// 自由文本段落。
    Paragraph { text: String },
}

//=============================================================================
// 7. 生成选项
//=============================================================================

/// 文档的外部样式表，只包含字号、颜色和间距常量。
///
/// 生成器仅消费这些值，不做任何取舍决策。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStyle {
    /// 标题颜色。
    pub title_color: String,
    /// 部分标题颜色。
    pub header_color: String,
    /// 链接颜色。
    pub link_color: String,
    /// 标题字号（pt）。
    pub title_size_pt: u32,
    /// 部分标题字号（pt）。
    pub header_size_pt: u32,
    /// 正文字号（pt）。
    pub body_size_pt: u32,
    /// 正文行距（pt）。
    pub body_leading_pt: u32,
    /// 部分标题与上文的间距（pt）。
    pub header_space_before_pt: u32,
    /// 部分标题与下文的间距（pt）。
    pub header_space_after_pt: u32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            title_color: "#0d47a1".to_string(),
            header_color: "#0d47a1".to_string(),
            link_color: "#1565c0".to_string(),
            title_size_pt: 18,
            header_size_pt: 14,
            body_size_pt: 11,
            body_leading_pt: 14,
            header_space_before_pt: 12,
            header_space_after_pt: 6,
        }
    }
}

/// HTML 生成选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlGenerationOptions {
    /// 是否输出格式化（带缩进）的 HTML 文档。
    pub format: bool,
    /// 指定输出文档的语言（lang 属性）。如果为 None，则省略该属性。
    pub language: Option<String>,
    /// 文档样式表。
    pub style: DocumentStyle,
}

impl Default for HtmlGenerationOptions {
    fn default() -> Self {
        Self {
            format: false,
            language: None,
            style: DocumentStyle::default(),
        }
    }
}
