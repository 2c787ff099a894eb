//! link_processor.rs
//!
//! 该模块定义了 `LinkStore`，一个用于统一处理、规范化和存储
//! 档案中各类链接的核心组件。
//!
//! 主要职责包括：
//! 1. 将不同别名的链接键（如 "gh", "github"）映射到一个统一的
//!    规范化键（`CanonicalLinkKey`）。
//! 2. 存储和管理链接地址，支持单个键对应多个地址的情况。
//! 3. 提供数据清理功能，如 URL 前缀补全、去除重复值和首尾空格。
//! 4. 作为一个中间层，为后续的规范化和文档组装步骤提供干净、
//!    一致的链接数据源。

use std::collections::HashMap;

use crate::normalizer::normalize_url;
use crate::types::{CanonicalLinkKey, LinkEntry, ParseCanonicalLinkKeyError};

/// `LinkStore` 是一个用于存储和管理规范化后链接的容器。
///
/// 它内部使用一个 `HashMap` 来存储数据，其中键是 `CanonicalLinkKey` 枚举，
/// 确保了链接键的类型安全和一致性；值是一个 `Vec<String>`，
/// 用以支持一个标签下存在多个地址的情况。
#[derive(Debug, Clone, Default)]
pub struct LinkStore {
    /// 内部数据存储结构。
    /// Key: `CanonicalLinkKey` - 经过规范化处理的链接键。
    /// Value: `Vec<String>` - 对应此键的所有地址的列表。
    data: HashMap<CanonicalLinkKey, Vec<String>>,
}

impl LinkStore {
    /// 创建一个新的、空的 `LinkStore` 实例。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 向存储中添加一个链接键值对。
    ///
    /// 该方法执行以下操作：
    /// 1. 对传入的 `value` 进行 URL 规范化（修剪空白并补全 `https://` 前缀）。
    /// 2. 如果规范化后的值为空字符串，则忽略该值，不进行添加。
    /// 3. 尝试将传入的 `key_str` 解析为一个标准的 `CanonicalLinkKey`。
    /// 4. 如果解析失败，则将原始的 `key_str`（转换为小写）作为一个
    ///    自定义键 `CanonicalLinkKey::Custom(...)` 来存储。
    /// 5. 将处理后的值添加到对应键的值列表中。
    ///
    /// # 参数
    ///
    /// * `key_str` - 原始的链接键字符串 (例如, "github", "in", 或一个非标准的 "blog")。
    /// * `value` - 与键关联的链接地址。
    ///
    /// # 返回
    ///
    /// * `Ok(())` - 如果值被成功添加或因其为空而被安全忽略。
    ///
    /// # 注意
    ///
    /// 此函数目前返回 `Result` 主要是为了保持 API 的扩展性，但在当前实现中，
    /// 由于所有解析失败的情况都被优雅地处理为自定义键，因此它实际上总会返回 `Ok(())`。
    pub fn add(&mut self, key_str: &str, value: &str) -> Result<(), ParseCanonicalLinkKeyError> {
        let normalized_value = normalize_url(value);

        if normalized_value.is_empty() {
            return Ok(());
        }

        let canonical_key = key_str
            .parse::<CanonicalLinkKey>()
            .unwrap_or_else(|_| CanonicalLinkKey::Custom(key_str.to_lowercase()));

        self.data
            .entry(canonical_key)
            .or_default()
            .push(normalized_value);

        Ok(())
    }

    /// 获取指定规范化键对应的第一个地址。
    ///
    /// # 返回
    ///
    /// * `Some(&String)` - 如果键存在且其值列表不为空，则返回第一个地址的引用。
    /// * `None` - 如果键不存在或其值列表为空。
    pub fn get_single_value(&self, key: &CanonicalLinkKey) -> Option<&String> {
        self.data.get(key).and_then(|values| values.first())
    }

    /// 获取指定规范化键对应的所有地址的列表。
    pub fn get_multiple_values(&self, key: &CanonicalLinkKey) -> Option<&Vec<String>> {
        self.data.get(key)
    }

    /// 对存储中的所有链接地址进行清理和去重。
    ///
    /// 它执行以下步骤：
    /// 1. 对每个值列表中的所有地址再次进行 trim 和空值移除，以防数据源不一致。
    /// 2. 如果清理后一个键的值列表变为空，则将该键标记为待删除。
    /// 3. 对非空的值列表进行排序并移除相邻的重复项。
    /// 4. 最后，移除所有被标记为待删除的键。
    pub fn deduplicate_values(&mut self) {
        let mut keys_to_remove: Vec<CanonicalLinkKey> = Vec::new();

        for (key, values) in self.data.iter_mut() {
            values.iter_mut().for_each(|v| *v = v.trim().to_string());
            values.retain(|v| !v.is_empty());

            if values.is_empty() {
                keys_to_remove.push(key.clone());
                continue;
            }

            values.sort_unstable();
            values.dedup();
        }

        for key in keys_to_remove {
            self.data.remove(&key);
        }
    }

    /// 从一个原始的、未规范化的链接 `HashMap` 中加载数据。
    ///
    /// 这个方法通常在解析完输入文件后调用，用于将输入中的额外链接
    /// (`HashMap<String, Vec<String>>`) 填入 `LinkStore`，
    /// 在这个过程中会通过调用 `add` 方法来完成键的规范化和值的清理。
    pub fn load_from_raw(&mut self, raw_links: &HashMap<String, Vec<String>>) {
        for (key, values) in raw_links {
            for value in values {
                let _ = self.add(key, value);
            }
        }
    }

    /// 提取所有自定义键的链接，按 (标签, 地址) 排序以保证输出稳定。
    ///
    /// 标准键（GitHub、LinkedIn、个人网站）不包含在内，它们由
    /// `Profile` 的专属字段承载。
    #[must_use]
    pub fn custom_links(&self) -> Vec<LinkEntry> {
        let mut entries: Vec<LinkEntry> = self
            .data
            .iter()
            .filter_map(|(key, values)| match key {
                CanonicalLinkKey::Custom(label) => Some((label, values)),
                _ => None,
            })
            .flat_map(|(label, values)| {
                values.iter().map(|url| LinkEntry {
                    label: label.clone(),
                    url: url.clone(),
                })
            })
            .collect();

        entries.sort_by(|a, b| (&a.label, &a.url).cmp(&(&b.label, &b.url)));
        entries
    }
}
