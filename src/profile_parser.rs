//! # 档案输入解析器
//!
//! 将输入文件内容解析为原始档案字段。目前仅支持 JSON 格式，
//! 所有字段均为可选，缺失的字段退化为空值。

use crate::types::{DocumentError, ProfileFormat, RawProfileInput};

/// 解析档案输入文件的内容。
///
/// # 参数
///
/// * `content` - 输入文件的文本内容。
/// * `format` - 输入文件的格式。
///
/// # 返回
///
/// * `Ok(RawProfileInput)` - 解析出的原始档案字段。
/// * `Err(DocumentError)` - 输入无法按给定格式解码。
pub fn parse_profile_input(
    content: &str,
    format: ProfileFormat,
) -> Result<RawProfileInput, DocumentError> {
    // 部分编辑器会在 UTF-8 文件头部写入 BOM
    let content = content.trim_start_matches('\u{feff}');

    if content.trim().is_empty() {
        return Err(DocumentError::InvalidProfileFormat(
            "输入内容为空".to_string(),
        ));
    }

    match format {
        ProfileFormat::Json => {
            let raw: RawProfileInput = serde_json::from_str(content)?;
            Ok(raw)
        }
    }
}
