use clap::Parser;

mod cmd;

fn main() {
    if let Err(err) = cmd::MainCmd::parse().run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
