//! # HTML 文档生成器
//!
//! 将内容块序列渲染为一份自包含的 HTML 文档（可下载的文档渲染面）。
//! 生成器只做逐块映射和样式表注入，所有取舍逻辑都已由组装器完成。

use std::{fmt::Write as _, io::Cursor};

use quick_xml::{
    Writer,
    events::{BytesText, Event},
};

use crate::types::{ContentBlock, DocumentError, DocumentStyle, HtmlGenerationOptions};

/// 没有任何标题块时使用的文档标题。
const FALLBACK_DOCUMENT_TITLE: &str = "Curriculum Vitae";

/// HTML 生成的主入口函数。
///
/// # 参数
/// * `blocks` - 组装器产出的内容块序列。
/// * `options` - HTML 生成选项，控制输出格式和样式。
///
/// # 返回
/// * `Ok(String)` - 成功生成的 HTML 字符串。
/// * `Err(DocumentError)` - 生成过程中发生错误。
pub fn generate_html(
    blocks: &[ContentBlock],
    options: &HtmlGenerationOptions,
) -> Result<String, DocumentError> {
    let mut buffer = Vec::new();
    let indent_char = b' ';
    let indent_size = 2;

    // 决定是否输出格式化的 HTML
    let result = if options.format {
        let mut writer =
            Writer::new_with_indent(Cursor::new(&mut buffer), indent_char, indent_size);
        generate_html_inner(&mut writer, blocks, options)
    } else {
        let mut writer = Writer::new(Cursor::new(&mut buffer));
        generate_html_inner(&mut writer, blocks, options)
    };

    result?;

    String::from_utf8(buffer).map_err(DocumentError::FromUtf8)
}

/// HTML 生成的核心内部逻辑。
fn generate_html_inner<W: std::io::Write>(
    writer: &mut Writer<W>,
    blocks: &[ContentBlock],
    options: &HtmlGenerationOptions,
) -> Result<(), DocumentError> {
    writer.write_event(Event::DocType(BytesText::new("html")))?;

    // 设置文档语言属性
    let lang_attr = options
        .language
        .as_ref()
        .filter(|s| !s.is_empty())
        .map(|lang| ("lang", lang.clone()));

    let mut element_writer = writer.create_element("html");
    if let Some((key, value)) = &lang_attr {
        element_writer = element_writer.with_attribute((*key, value.as_str()));
    }

    element_writer.write_inner_content(|writer| -> Result<(), std::io::Error> {
        write_html_head(writer, blocks, options).map_err(std::io::Error::other)?;
        write_html_body(writer, blocks).map_err(std::io::Error::other)?;
        Ok(())
    })?;

    Ok(())
}

fn write_html_head<W: std::io::Write>(
    writer: &mut Writer<W>,
    blocks: &[ContentBlock],
    options: &HtmlGenerationOptions,
) -> Result<(), DocumentError> {
    let stylesheet = build_stylesheet(&options.style)?;
    let title = document_title(blocks);

    writer
        .create_element("head")
        .write_inner_content(|writer| -> Result<(), std::io::Error> {
            writer
                .create_element("meta")
                .with_attribute(("charset", "utf-8"))
                .write_empty()?;
            writer
                .create_element("title")
                .write_text_content(BytesText::new(title))?;
            writer
                .create_element("style")
                .write_text_content(BytesText::new(&stylesheet))?;
            Ok(())
        })?;
    Ok(())
}

/// 写入 HTML 的 <body> 部分，逐块映射内容块序列。
fn write_html_body<W: std::io::Write>(
    writer: &mut Writer<W>,
    blocks: &[ContentBlock],
) -> Result<(), DocumentError> {
    let body_builder = writer.create_element("body");

    if blocks.is_empty() {
        body_builder.write_empty()?;
        return Ok(());
    }

    body_builder.write_inner_content(|writer| -> Result<(), std::io::Error> {
        for block in blocks {
            match block {
                ContentBlock::Title { text } => {
                    writer
                        .create_element("h1")
                        .write_text_content(BytesText::new(text))?;
                }
                ContentBlock::ContactLine { label, text } => {
                    let line = format!("{label}: {text}");
                    writer
                        .create_element("p")
                        .with_attribute(("class", "contact"))
                        .write_text_content(BytesText::new(&line))?;
                }
                ContentBlock::SectionHeader { text } => {
                    writer
                        .create_element("h2")
                        .write_text_content(BytesText::new(text))?;
                }
                ContentBlock::BulletItem { text } => {
                    let line = format!("• {text}");
                    writer
                        .create_element("p")
                        .with_attribute(("class", "bullet"))
                        .write_text_content(BytesText::new(&line))?;
                }
                ContentBlock::LinkItem { text, url } => {
                    let prefix = format!("{text} — ");
                    writer
                        .create_element("p")
                        .with_attribute(("class", "link"))
                        .write_inner_content(|writer| -> Result<(), std::io::Error> {
                            writer.write_event(Event::Text(BytesText::new(&prefix)))?;
                            writer
                                .create_element("a")
                                .with_attribute(("href", url.as_str()))
                                .write_text_content(BytesText::new(url))?;
                            Ok(())
                        })?;
                }
                ContentBlock::Paragraph { text } => {
                    writer
                        .create_element("p")
                        .write_text_content(BytesText::new(text))?;
                }
            }
        }
        Ok(())
    })?;
    Ok(())
}

/// 取第一个非空标题块作为文档标题，否则使用固定回退值。
fn document_title(blocks: &[ContentBlock]) -> &str {
    blocks
        .iter()
        .find_map(|block| match block {
            ContentBlock::Title { text } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or(FALLBACK_DOCUMENT_TITLE)
}

/// 从样式表常量构建内嵌 CSS。
fn build_stylesheet(style: &DocumentStyle) -> Result<String, DocumentError> {
    let mut css = String::new();
    writeln!(
        css,
        "body {{ font-family: Helvetica, Arial, sans-serif; font-size: {}pt; line-height: {}pt; margin: 48pt; }}",
        style.body_size_pt, style.body_leading_pt
    )?;
    writeln!(
        css,
        "h1 {{ font-size: {}pt; color: {}; margin: 0 0 {}pt 0; }}",
        style.title_size_pt, style.title_color, style.header_space_before_pt
    )?;
    writeln!(
        css,
        "h2 {{ font-size: {}pt; color: {}; margin: {}pt 0 {}pt 0; }}",
        style.header_size_pt,
        style.header_color,
        style.header_space_before_pt,
        style.header_space_after_pt
    )?;
    writeln!(css, "p {{ margin: 0 0 4pt 0; }}")?;
    writeln!(
        css,
        "a, .link {{ color: {}; }}",
        style.link_color
    )?;
    Ok(css)
}
