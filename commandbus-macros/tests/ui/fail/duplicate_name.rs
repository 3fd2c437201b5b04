use commandbus::Command;

#[derive(Command)]
#[command(name = "A", name = "B")]
struct Rename;

fn main() {
    let _ = Rename;
}
