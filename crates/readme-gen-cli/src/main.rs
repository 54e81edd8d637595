use std::process;

fn main() {
    match readme_gen_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("readme-gen error: {err}");
            process::exit(1);
        }
    }
}
