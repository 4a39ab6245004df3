// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了框架片段在路由模板编译与配置加载过程中可能抛出的各类异常情况。
//!
//! ## 设计意图
//! - **错误分类**：涵盖了路由模板语法错误、模式编译错误以及缓存引擎的错误码反馈。
//! - **语义映射**：每个变体都对应一类构造期失败，便于上层在启动阶段拒绝注册非法路由。
//! - **用户友好**：通过实现 `std::fmt::Display`，确保错误信息可以被安全地记录到日志中。

use std::fmt;

/// 框架片段在构造与配置阶段发生的异常类型。
///
/// 该枚举通常作为 `Result` 的 `Err` 部分返回，用于指示构造失败的具体原因。
/// 注意路径匹配失败不属于异常：不匹配是正常的否定结果。
#[derive(Debug, Copy, Clone)]
pub enum Exception {
    /// 路由模板的变量段声明了不受支持的类型标签。
    /// 该模板应被视为非法配置，对应的路由不应被注册。
    UnknownSegmentType,
    /// 由模板合成的模式无法被正则引擎编译。
    /// 静态段的字面量在嵌入前均已转义，正常情况下不应出现此错误。
    PatternCompileFailed,
    /// 缓存引擎返回了非零错误码。具体含义见 `param::CACHE_ERROR_CODES` 码表。
    CacheEngineFailure,
}

use Exception::*;

/// 为 `Exception` 实现 `Display` 特性，使其支持字符串格式化输出。
///
/// 工业实践中，这些描述信息常用于系统日志（Logging）以及启动阶段的配置报错。
impl fmt::Display for Exception {
    /// 根据错误类型写入人类可读的描述文本。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownSegmentType => write!(f, "Route template declares an unknown segment type"),
            PatternCompileFailed => write!(f, "Route pattern was rejected by the regex engine"),
            CacheEngineFailure => write!(f, "Cache engine reported a failure code"),
        }
    }
}
