use aerocode::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    aerocode::cli::logging::init_tracing(global.verbose);

    match cli.command {
        Commands::Aircraft(cmd) => aerocode::cli::commands::aircraft::run(cmd, &global),
        Commands::Part(cmd) => aerocode::cli::commands::part::run(cmd, &global),
        Commands::Stage(cmd) => aerocode::cli::commands::stage::run(cmd, &global),
        Commands::Test(cmd) => aerocode::cli::commands::test::run(cmd, &global),
        Commands::Employee(cmd) => aerocode::cli::commands::employee::run(cmd, &global),
        Commands::Link(cmd) => aerocode::cli::commands::link::run(cmd, &global),
        Commands::Line(args) => aerocode::cli::commands::line::run(args, &global),
        Commands::Report(args) => aerocode::cli::commands::report::run(args, &global),
        Commands::Config(cmd) => aerocode::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => aerocode::cli::commands::completions::run(args),
    }
}
