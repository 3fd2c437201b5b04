use commandbus::Command;

#[derive(Command)]
#[command(name = "CreateUser")]
struct CreateUser {
    #[allow(dead_code)]
    name: String,
}

fn main() {
    assert_eq!(<CreateUser as commandbus::command::Command>::NAME, Some("CreateUser"));
}
