use std::process;

fn main() {
    if let Err(err) = chatgpt_transcript::cli::run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
