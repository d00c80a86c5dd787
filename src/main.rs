use orderlens::cli::{exit_code, run};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        let mut causes = e.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nCaused by:");
            for (indent, cause) in causes.enumerate() {
                eprintln!("{:indent$}  {}", "", cause, indent = indent);
            }
        }
        std::process::exit(exit_code(&e));
    }
}
