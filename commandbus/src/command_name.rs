//! 命令标识解析（Command Name）
//!
//! 将命令类型映射为稳定的字符串键，作为命令总线的路由索引：
//! - 命令自报名称（`Command::NAME = Some(..)`）时原样使用，不做任何类型检查；
//! - 否则回退到 `std::any::type_name`，生成 `{命名空间}/{*..}{类型名}` 形式的键。
//!
//! 回退键对（指针层数、命名空间、类型名）是单射的：`pkg::Foo` 得到 `pkg/Foo`，
//! `Box<pkg::Foo>` 得到 `pkg/*Foo`，不同模块下的同名类型互不冲突。
//! 自报名称与回退键之间的冲突由调用方自行避免。
//!
//! `type_name` 的输出只保证在同一编译产物内稳定，因此回退键只适合进程内路由，
//! 不应持久化或跨进程传递。
//!
use crate::command::Command;
use std::any::type_name;
use std::borrow::Cow;

// 视为“指针”的包装类型前缀；剥离一层记一个 `*`
const POINTER_WRAPPERS: [&str; 3] = ["alloc::boxed::Box<", "alloc::sync::Arc<", "alloc::rc::Rc<"];

/// 解析命令类型 `C` 的路由键
pub fn resolve_command_name<C: Command>() -> Cow<'static, str> {
    match C::NAME {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(type_name_key(type_name::<C>())),
    }
}

/// 解析命令实例的路由键（与 [`resolve_command_name`] 等价，便于从值推断类型）
pub fn command_name_of<C: Command>(_cmd: &C) -> Cow<'static, str> {
    resolve_command_name::<C>()
}

/// 由完整类型名推导回退键
pub(crate) fn type_name_key(full: &str) -> String {
    let mut inner = full;
    let mut pointers = 0usize;

    loop {
        if let Some(rest) = inner.strip_prefix("&mut ") {
            inner = rest;
        } else if let Some(rest) = inner.strip_prefix('&') {
            inner = rest;
        } else if let Some(rest) = POINTER_WRAPPERS
            .iter()
            .find_map(|p| inner.strip_prefix(p).and_then(|r| r.strip_suffix('>')))
        {
            inner = rest.strip_suffix(", alloc::alloc::Global").unwrap_or(rest);
        } else {
            break;
        }
        pointers += 1;
    }

    let (namespace, name) = split_path(inner);
    format!("{namespace}/{}{name}", "*".repeat(pointers))
}

// 在最外层（不在 <>、()、[] 内）的最后一个 `::` 处切分为命名空间与类型名；
// 函数指针返回类型中的 `->` 不计入括号深度
fn split_path(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    let mut depth = 0i32;
    let mut split = None;

    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' | b')' | b']' => depth -= 1,
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => split = Some(i),
            _ => {}
        }
    }

    match split {
        Some(i) => (&path[..i], &path[i + 2..]),
        None => ("", path),
    }
}
