use clap_markdown::help_markdown;
use upcase_file::cli::Cli;

fn main() {
    println!("# upcase-file CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `upcase-file` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
