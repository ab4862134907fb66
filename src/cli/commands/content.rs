use crate::cli::resource::ResourceKind;
use clap::{Arg, ArgAction, Command, builder::EnumValueParser};

pub const ARG_RESOURCE: &str = "resource";
pub const ARG_ID: &str = "id";
pub const ARG_DATA: &str = "data";
pub const ARG_ALL: &str = "all";
pub const ARG_ARTICLE: &str = "article";
pub const ARG_COMPLETED: &str = "completed";

fn resource_arg() -> Arg {
    Arg::new(ARG_RESOURCE)
        .help("Collection name")
        .required(true)
        .value_parser(EnumValueParser::<ResourceKind>::new())
}

fn id_arg() -> Arg {
    Arg::new(ARG_ID).help("Record identifier").required(true)
}

fn data_arg() -> Arg {
    Arg::new(ARG_DATA)
        .short('d')
        .long(ARG_DATA)
        .help("Record fields as a JSON object")
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("list")
                .about("List records; public listings by default")
                .arg(resource_arg())
                .arg(
                    Arg::new(ARG_ALL)
                        .long(ARG_ALL)
                        .help("Include unpublished and pending records (admin)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new(ARG_ARTICLE)
                        .long(ARG_ARTICLE)
                        .help("Only reviews or comments attached to this article"),
                )
                .arg(
                    Arg::new(ARG_COMPLETED)
                        .long(ARG_COMPLETED)
                        .help("List completed instead of active projects")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Show one record")
                .arg(resource_arg())
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a record (admin)")
                .arg(resource_arg())
                .arg(data_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Update a record (admin)")
                .arg(resource_arg())
                .arg(id_arg())
                .arg(data_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a record (admin)")
                .arg(resource_arg())
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("moderate")
                .about("Approve visitor content or publish site content (admin)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("approve")
                        .about("Show a review, testimonial or comment publicly")
                        .arg(resource_arg())
                        .arg(id_arg()),
                )
                .subcommand(
                    Command::new("reject")
                        .about("Hide a review, testimonial or comment")
                        .arg(resource_arg())
                        .arg(id_arg()),
                )
                .subcommand(
                    Command::new("publish")
                        .about("Publish an article, service, staff profile, career or story")
                        .arg(resource_arg())
                        .arg(id_arg()),
                )
                .subcommand(
                    Command::new("unpublish")
                        .about("Unpublish an article, service, staff profile, career or story")
                        .arg(resource_arg())
                        .arg(id_arg()),
                ),
        )
}
