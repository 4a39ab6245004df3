// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 路由模板编译模块
//!
//! 该模块是框架片段的核心组件，负责将路由模板字符串解析为强类型的
//! 段序列，并编译为可复用的匹配模式。它涵盖了：
//! 1. 模板切分与变量段解析（变量名、类型标签）。
//! 2. 模式合成（字面量转义、按类型选择捕获字符类、两端锚定与可选尾部斜杠）。
//! 3. 请求路径的全串匹配与按模板顺序的原始捕获。
//!
//! 类型标签只约束匹配阶段接受的字符集；将捕获值转换为数值类型是调用方的职责。

use crate::{exception::Exception, param::*};
use log::error;
use regex::{escape, Regex, RegexBuilder};

/// 路由模板中的一个段。
///
/// 段的顺序与模板中出现的顺序一致，匹配时逐段对应路径分量。
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// 静态段，按字面量匹配固定的路径分量
    Static(String),
    /// 变量段，按声明的类型捕获一个路径分量
    Variable {
        /// 绑定的变量名
        name: String,
        /// 声明的参数类型
        kind: SegmentKind,
    },
}

/// 表示一条编译完成的路由模板。
///
/// 构造完成后不可变，可在多个线程间共享并并发执行只读匹配。
#[derive(Debug, Clone)]
pub struct RoutePattern {
    /// 模板解析得到的段序列（静态段与变量段按模板顺序交错排列）
    segments: Vec<Segment>,
    /// 由段序列合成的全串匹配模式
    regex: Regex,
}

impl RoutePattern {
    /// 从路由模板字符串尝试构建 `RoutePattern` 实例。
    ///
    /// # 逻辑步骤
    /// 1. 切分模板：以 `/` 为界切分为段，段数上限为 `MAX_ROUTE_SEGMENTS`。
    /// 2. 解析各段：不含 `$` 的段为静态段；否则剥离起始的 `$`，
    ///    再以 `:` 分离变量名与可选的类型标签。
    /// 3. 合成模式：转义静态段字面量、拼接捕获字符类，并在两端加上锚点。
    ///
    /// # 参数
    /// * `template` - 来自路由表配置的模板字符串，例如 `"users/$id:int/$action"`。
    ///
    /// # 错误处理
    /// 如果某个变量段声明了不受支持的类型标签，将返回
    /// `Exception::UnknownSegmentType`，不产生任何部分构造的模式。
    pub fn parse(template: &str) -> Result<Self, Exception> {
        let mut segments = Vec::new();

        // 1. 切分模板。splitn 保证段数有界，超限的尾部整体落入最后一段
        for slice in template.splitn(MAX_ROUTE_SEGMENTS, '/') {
            // 2. 不含变量标记的段按字面量原样保存
            if !slice.contains(VAR_MARKER) {
                segments.push(Segment::Static(slice.to_string()));
                continue;
            }

            // 变量段：剥离起始标记，再以 ':' 分离变量名与类型标签
            let body = slice.strip_prefix(VAR_MARKER).unwrap_or(slice);
            let mut parts = body.splitn(2, ':');
            let name = parts.next().unwrap_or("").to_string();
            let kind = match parts.next() {
                None | Some("") => SegmentKind::Untyped,
                Some(tag) => match SEGMENT_TYPE_TAGS.get(tag) {
                    Some(kind) => *kind,
                    None => {
                        error!("路由模板'{}'中声明了未知的类型标签：{}", template, tag);
                        return Err(Exception::UnknownSegmentType);
                    }
                },
            };
            segments.push(Segment::Variable { name, kind });
        }

        // 3. 合成模式并编译。匹配路径时忽略大小写
        let pattern = Self::assemble(&segments);
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                error!("路由模式'{}'编译失败：{}", pattern, e);
                return Err(Exception::PatternCompileFailed);
            }
        };

        Ok(Self { segments, regex })
    }

    /// 将段序列拼接为两端锚定、允许可选尾部斜杠的模式文本。
    ///
    /// 各段之间以 `/` 连接。静态段的字面量在嵌入前转义，
    /// 防止其中的保留字符破坏整体模式。
    fn assemble(segments: &[Segment]) -> String {
        let mut pattern = String::from("^");
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                pattern.push('/');
            }
            match segment {
                Segment::Static(literal) => pattern.push_str(&escape(literal)),
                Segment::Variable { kind, .. } => pattern.push_str(&kind.to_string()),
            }
        }
        pattern.push_str("/?$");
        pattern
    }

    /// 将请求路径与编译后的模式进行全串匹配。
    ///
    /// 匹配成功时按模板顺序返回各变量段捕获的原始字符串
    /// （静态段不产生捕获），失败时返回 `None`。
    /// 不匹配是正常的否定结果，而不是错误。
    pub fn matches(&self, path: &str) -> Option<Vec<String>> {
        let captures = self.regex.captures(path)?;
        Some(
            captures
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }
}

// --- Getter 访问器实现 ---

impl RoutePattern {
    /// 获取模板解析得到的段序列
    pub fn segments(&self) -> &Vec<Segment> {
        &self.segments
    }

    /// 获取合成的模式文本，用于日志与诊断
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}
