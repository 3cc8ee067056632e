use aesthetica::commands::command_argument_builder;
use aesthetica::handlers::{handle_build, handle_sync, init_logging};
use aesthetica_core::print_banner;

fn main() {
    let chosen_command = command_argument_builder().get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    init_logging(quiet);

    match chosen_command.subcommand() {
        Some(("build", primary_command)) => handle_build(primary_command, quiet),
        Some(("sync", primary_command)) => handle_sync(primary_command, quiet),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
