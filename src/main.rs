use std::env;

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    std::process::exit(gitsl::run(&argv));
}
