#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CommandId {
    Help,
    Show,
    Totals,
    Players,
    Holes,
    Score,
    Par,
    StrokeIndex,
    Name,
    Handicap,
    Course,
    Stableford,
    Hole,
    Undo,
    Redo,
    Reset,
    Import,
    Export,
    Share,
    Timer,
    Exit,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SubcommandId {
    On,
    Off,
    Next,
    Prev,
    Json,
    Csv,
    Html,
    Start,
    Stop,
    Status,
    Reset,
}

pub(crate) struct ReplCommand {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) aliases: &'static [&'static str],
    pub(crate) subcommands: &'static [ReplSubcommand],
}

pub(crate) struct ReplSubcommand {
    pub(crate) id: SubcommandId,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

const STABLEFORD_SUBCOMMANDS: &[ReplSubcommand] = &[
    ReplSubcommand {
        id: SubcommandId::On,
        name: "on",
        description: "show Stableford points",
    },
    ReplSubcommand {
        id: SubcommandId::Off,
        name: "off",
        description: "hide Stableford points",
    },
];

const HOLE_SUBCOMMANDS: &[ReplSubcommand] = &[
    ReplSubcommand {
        id: SubcommandId::Next,
        name: "next",
        description: "move to the next hole",
    },
    ReplSubcommand {
        id: SubcommandId::Prev,
        name: "prev",
        description: "move to the previous hole",
    },
];

const EXPORT_SUBCOMMANDS: &[ReplSubcommand] = &[
    ReplSubcommand {
        id: SubcommandId::Json,
        name: "json",
        description: "round as JSON (re-importable)",
    },
    ReplSubcommand {
        id: SubcommandId::Csv,
        name: "csv",
        description: "par row and gross scores as CSV",
    },
    ReplSubcommand {
        id: SubcommandId::Html,
        name: "html",
        description: "printable scorecard page",
    },
];

const TIMER_SUBCOMMANDS: &[ReplSubcommand] = &[
    ReplSubcommand {
        id: SubcommandId::Start,
        name: "start",
        description: "start the pace-of-play clock on the current hole",
    },
    ReplSubcommand {
        id: SubcommandId::Stop,
        name: "stop",
        description: "stop the clock",
    },
    ReplSubcommand {
        id: SubcommandId::Status,
        name: "status",
        description: "elapsed time overall and on this hole",
    },
    ReplSubcommand {
        id: SubcommandId::Reset,
        name: "reset",
        description: "clear all recorded times",
    },
];

pub(crate) const REPL_COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        id: CommandId::Help,
        name: "help",
        usage: "help",
        description: "Show this help.",
        aliases: &["?", "-h", "--help"],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Show,
        name: "show",
        usage: "show",
        description: "Print the card.",
        aliases: &["card"],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Totals,
        name: "totals",
        usage: "totals",
        description: "Print gross, net and point totals.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Players,
        name: "players",
        usage: "players N",
        description: "Set the number of players (1-4).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Holes,
        name: "holes",
        usage: "holes N",
        description: "Set the number of holes (1-18).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Score,
        name: "score",
        usage: "score P [H] V",
        description: "Record a gross score; H defaults to the current hole.",
        aliases: &["s"],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Par,
        name: "par",
        usage: "par H V",
        description: "Set par for a hole (3-6).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::StrokeIndex,
        name: "si",
        usage: "si H V",
        description: "Set the stroke index for a hole.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Name,
        name: "name",
        usage: "name P NAME",
        description: "Rename a player (20 characters max).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Handicap,
        name: "hcp",
        usage: "hcp P V",
        description: "Set a player's handicap (0-54).",
        aliases: &["handicap"],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Course,
        name: "course",
        usage: "course NAME",
        description: "Set the course label.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Stableford,
        name: "stableford",
        usage: "stableford on|off",
        description: "Toggle Stableford points.",
        aliases: &[],
        subcommands: STABLEFORD_SUBCOMMANDS,
    },
    ReplCommand {
        id: CommandId::Hole,
        name: "hole",
        usage: "hole N|next|prev",
        description: "Move the current hole.",
        aliases: &[],
        subcommands: HOLE_SUBCOMMANDS,
    },
    ReplCommand {
        id: CommandId::Undo,
        name: "undo",
        usage: "undo",
        description: "Undo the last change.",
        aliases: &["u"],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Redo,
        name: "redo",
        usage: "redo",
        description: "Redo the last undone change.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Reset,
        name: "reset",
        usage: "reset",
        description: "Start a fresh card (undoable).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Import,
        name: "import",
        usage: "import PATH",
        description: "Load a round from a JSON file (undoable).",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Export,
        name: "export",
        usage: "export json|csv|html [PATH]",
        description: "Write the round to a file.",
        aliases: &[],
        subcommands: EXPORT_SUBCOMMANDS,
    },
    ReplCommand {
        id: CommandId::Share,
        name: "share",
        usage: "share",
        description: "Print a link that restores this round.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Timer,
        name: "timer",
        usage: "timer start|stop|status|reset",
        description: "Pace-of-play clock.",
        aliases: &[],
        subcommands: TIMER_SUBCOMMANDS,
    },
    ReplCommand {
        id: CommandId::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the REPL.",
        aliases: &[],
        subcommands: &[],
    },
    ReplCommand {
        id: CommandId::Quit,
        name: "quit",
        usage: "quit",
        description: "Exit the REPL.",
        aliases: &["q"],
        subcommands: &[],
    },
];

pub(crate) fn find_command(name: &str) -> Option<&'static ReplCommand> {
    REPL_COMMANDS
        .iter()
        .find(|command| command.name == name || command.aliases.contains(&name))
}

pub(crate) fn find_subcommand(
    subcommands: &'static [ReplSubcommand],
    name: &str,
) -> Option<&'static ReplSubcommand> {
    subcommands
        .iter()
        .find(|subcommand| subcommand.name == name)
}

pub(crate) fn subcommand_help(command: &ReplCommand) -> String {
    let mut help = format!("usage: {}", command.usage);
    for subcommand in command.subcommands {
        help.push_str(&format!("\n  {:<8}{}", subcommand.name, subcommand.description));
    }
    help
}

pub(crate) fn build_repl_help() -> String {
    let mut help = String::from("Commands:");
    for command in REPL_COMMANDS {
        let names = if command.aliases.is_empty() {
            command.usage.to_string()
        } else {
            format!("{} ({})", command.usage, command.aliases.join(", "))
        };
        help.push_str("\n  ");
        help.push_str(&names);
        let padding = 34usize.saturating_sub(names.len());
        help.push_str(&" ".repeat(padding.max(2)));
        help.push_str(command.description);
    }
    help
}
