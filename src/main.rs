use std::process;

fn main() {
    if let Err(e) = gmake::cli::run() {
        gmake::ui::fatal(&e.to_string());
        process::exit(1);
    }
}
