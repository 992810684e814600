use clap::Parser;
use romgen::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = romgen::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
