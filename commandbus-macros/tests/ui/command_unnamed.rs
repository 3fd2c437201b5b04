use commandbus::Command;
use commandbus::command_name::resolve_command_name;

#[derive(Command)]
struct DeleteUser {
    #[allow(dead_code)]
    id: u32,
}

fn main() {
    assert_eq!(<DeleteUser as commandbus::command::Command>::NAME, None);
    // 未自报名称时由类型路径推导
    assert!(resolve_command_name::<DeleteUser>().ends_with("/DeleteUser"));
    assert!(resolve_command_name::<Box<DeleteUser>>().ends_with("/*DeleteUser"));
}
