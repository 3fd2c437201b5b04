use proc_macro::TokenStream;

mod command;

/// 命令派生宏
/// - 为目标类型实现 `::commandbus::command::Command`
/// - 支持参数：`#[command(name = "CreateUser")]` 设置自报名称；
///   缺省时 `NAME = None`，由类型名推导路由键
#[proc_macro_derive(Command, attributes(command))]
pub fn command(input: TokenStream) -> TokenStream {
    command::expand(input)
}
