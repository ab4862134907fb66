use clap::{Arg, Command};

pub const ARG_EMAIL: &str = "email";
pub const ARG_CODE: &str = "code";
pub const ARG_PASSWORD: &str = "password";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Administrator email address")
        .env("FINCOUNSEL_ADMIN_EMAIL")
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command.subcommand(
        Command::new("auth")
            .about("Sign in to the admin console")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new("request-code")
                    .about("Email a one-time sign-in code")
                    .arg(email_arg()),
            )
            .subcommand(
                Command::new("verify")
                    .about("Exchange the emailed code for a session")
                    .arg(email_arg())
                    .arg(
                        Arg::new(ARG_CODE)
                            .short('c')
                            .long(ARG_CODE)
                            .help("The 6-digit code")
                            .required(true),
                    ),
            )
            .subcommand(
                Command::new("login")
                    .about("Sign in with a password (older accounts)")
                    .arg(email_arg())
                    .arg(
                        Arg::new(ARG_PASSWORD)
                            .long(ARG_PASSWORD)
                            .help("Account password")
                            .env("FINCOUNSEL_ADMIN_PASSWORD")
                            .hide_env_values(true)
                            .required(true),
                    ),
            )
            .subcommand(Command::new("logout").about("Forget the stored session"))
            .subcommand(Command::new("status").about("Show whether a session is stored")),
    )
}
