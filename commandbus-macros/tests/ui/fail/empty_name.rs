use commandbus::Command;

#[derive(Command)]
#[command(name = "")]
struct Rename;

fn main() {
    let _ = Rename;
}
