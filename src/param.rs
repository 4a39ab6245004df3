// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 框架参数与常量模块
//!
//! 该模块定义了 `shaneyale-webroute` 各组件共享的常量和数据结构，包括：
//! - 路由模板支持的参数类型标签映射表。
//! - 缓存引擎错误码及其描述文本的映射表。
//! - 变量段参数类型的强类型枚举。

use std::collections::HashMap;
use lazy_static::lazy_static;

/// 路由模板中变量段的起始标记字符
pub const VAR_MARKER: char = '$';

/// 模板切分时允许产生的最大段数。
///
/// 切分使用 `splitn`，超出上限的尾部会整体保留在最后一段中，
/// 以此限制病态输入能产生的段序列长度。
pub const MAX_ROUTE_SEGMENTS: usize = 32;

/// 会话 Cookie 的默认生存期（秒）。0 表示随浏览器会话结束而失效。
pub const DEFAULT_COOKIE_LIFETIME: u32 = 0;

/// 会话 Cookie 的默认作用路径
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// 缓存引擎调用成功时约定的返回码
pub const CACHE_CODE_OK: u16 = 0;

lazy_static! {
    /// 路由模板支持的类型标签映射表。
    ///
    /// 标签区分大小写：`str`/`string` 归并为字符串类型，`int`/`integer`
    /// 归并为整数类型。不在表中的标签将导致模板构造失败。
    pub static ref SEGMENT_TYPE_TAGS: HashMap<&'static str, SegmentKind> = {
        let mut map = HashMap::new();
        map.insert("str", SegmentKind::Str);
        map.insert("string", SegmentKind::Str);
        map.insert("int", SegmentKind::Integer);
        map.insert("integer", SegmentKind::Integer);
        map.insert("float", SegmentKind::Float);
        map
    };
}

lazy_static! {
    /// 缓存引擎错误码与其描述文本的映射表。
    ///
    /// 错误码由缓存引擎协作方返回，本库只负责提供统一的码表。
    pub static ref CACHE_ERROR_CODES: HashMap<u16, &'static str> = {
        let mut map = HashMap::new();
        // 0: 成功
        map.insert(0, "OK");

        // 1xx: 连接类错误
        map.insert(101, "Connection Refused");
        map.insert(102, "Connection Timed Out");
        map.insert(103, "Authentication Failed");
        map.insert(104, "Engine Not Initialized");

        // 2xx: 读写类错误
        map.insert(201, "Key Not Found");
        map.insert(202, "Key Too Long");
        map.insert(203, "Value Too Large");
        map.insert(204, "Store Failed");
        map.insert(205, "Delete Failed");

        // 3xx: 数据类错误
        map.insert(301, "Serialization Failed");
        map.insert(302, "Deserialization Failed");
        map.insert(303, "Checksum Mismatch");
        map
    };
}

/// 路由模板中变量段可声明的参数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// 未声明类型，匹配除 `/` 外的任意字符
    Untyped,
    /// 字符串类型，匹配字母、数字及常见标点
    Str,
    /// 整数类型，仅匹配十进制数字
    Integer,
    /// 浮点类型，匹配数字与小数点
    Float,
}

use std::fmt;

impl fmt::Display for SegmentKind {
    /// 将枚举格式化为模式中对应的捕获字符类
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SegmentKind::Untyped => write!(f, "([^/]+)"),
            SegmentKind::Str => write!(f, r"([a-zA-Z0-9\-_. ]+)"),
            SegmentKind::Integer => write!(f, "([0-9]+)"),
            SegmentKind::Float => write!(f, "([0-9.]+)"),
        }
    }
}
