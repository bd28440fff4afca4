use lumaboy::{Options, USAGE};

fn main() {
    env_logger::init();

    let options = Options::parse(std::env::args().skip(1)).unwrap_or_else(|err| {
        eprintln!("{err:#}");
        eprintln!("{USAGE}");
        std::process::exit(2);
    });

    if let Err(err) = lumaboy::run(&options) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
