mod cli;
mod combinations;
mod expression;
mod ops;
mod pool;
mod puzzle;
mod solver;
mod wire;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
