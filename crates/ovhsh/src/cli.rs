use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ovhsh")]
#[command(about = "Interactive and one-shot command shell")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'y', long = "yes", help = "Answer yes to every confirmation prompt")]
    pub yes: bool,

    #[arg(short = 'q', long = "silent", help = "Only print warnings and errors")]
    pub silent: bool,

    #[arg(long = "no-confirm", help = "Skip confirmation prompts")]
    pub no_confirm: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, help = "Print the command graph and exit")]
    pub dump_graph: bool,

    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command to run; starts an interactive shell when omitted"
    )]
    pub command: Vec<String>,
}
