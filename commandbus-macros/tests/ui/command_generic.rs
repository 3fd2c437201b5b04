use commandbus::Command;
use commandbus::command_name::resolve_command_name;

#[derive(Command)]
#[command(name = "Import")]
struct Import<T: Send + Sync + 'static> {
    #[allow(dead_code)]
    rows: Vec<T>,
}

#[derive(Command)]
enum Toggle {
    On,
    Off,
}

fn main() {
    assert_eq!(resolve_command_name::<Import<u8>>(), "Import");
    assert_eq!(resolve_command_name::<Import<String>>(), "Import");

    let _ = [Toggle::On, Toggle::Off];
    assert!(resolve_command_name::<Toggle>().ends_with("/Toggle"));
}
