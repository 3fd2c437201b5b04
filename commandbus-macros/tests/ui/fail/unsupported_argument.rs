use commandbus::Command;

#[derive(Command)]
#[command(alias = "X")]
struct Rename;

fn main() {
    let _ = Rename;
}
