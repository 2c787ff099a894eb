//! # Markdown 摘要生成器
//!
//! 将内容块序列渲染为 Markdown 文本（屏幕渲染面）。与 HTML 生成器
//! 消费同一份块序列，二者不得各自重新推导取舍逻辑。

use std::fmt::Write as _;

use crate::types::{ContentBlock, DocumentError};

/// Markdown 生成的主入口函数。
///
/// 映射规则：标题 → `#`，部分标题 → `##`，列表项 → `- `，
/// 带链接的列表项 → `- [文本](地址)`，联系方式行与段落 → 普通文本行。
/// 输出是确定性的：相同的块序列总是产生相同的文本。
pub fn generate_markdown(blocks: &[ContentBlock]) -> Result<String, DocumentError> {
    let mut out = String::new();

    for block in blocks {
        match block {
            ContentBlock::Title { text } => {
                writeln!(out, "# {text}")?;
            }
            ContentBlock::ContactLine { label, text } => {
                writeln!(out, "{label}: {text}")?;
            }
            ContentBlock::SectionHeader { text } => {
                writeln!(out)?;
                writeln!(out, "## {text}")?;
            }
            ContentBlock::BulletItem { text } => {
                writeln!(out, "- {text}")?;
            }
            ContentBlock::LinkItem { text, url } => {
                writeln!(out, "- [{text}]({url})")?;
            }
            ContentBlock::Paragraph { text } => {
                writeln!(out, "{text}")?;
            }
        }
    }

    Ok(out)
}
