use clap::{Arg, Command, builder::PossibleValuesParser};

pub const ARG_ARTICLE: &str = "article";
pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_RATING: &str = "rating";
pub const ARG_COMMENT: &str = "comment";
pub const ARG_CONTENT: &str = "content";
pub const ARG_ROLE: &str = "role";
pub const ARG_COMPANY: &str = "company";
pub const ARG_PHONE: &str = "phone";
pub const ARG_SUBJECT: &str = "subject";
pub const ARG_MESSAGE: &str = "message";
pub const ARG_KIND: &str = "kind";
pub const ARG_ID: &str = "id";

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn rating_arg() -> Arg {
    text_arg(ARG_RATING, "Rating from 1 to 5")
        .required(true)
        .value_parser(clap::value_parser!(u8).range(1..=5))
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("submit")
                .about("Submit a review, testimonial or comment for approval")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("review")
                        .arg(text_arg(ARG_ARTICLE, "Article identifier").required(true))
                        .arg(text_arg(ARG_NAME, "Your name").required(true))
                        .arg(text_arg(ARG_EMAIL, "Your email (optional)"))
                        .arg(text_arg(ARG_COMMENT, "Review text").required(true))
                        .arg(rating_arg()),
                )
                .subcommand(
                    Command::new("testimonial")
                        .arg(text_arg(ARG_NAME, "Your name").required(true))
                        .arg(text_arg(ARG_ROLE, "Your role"))
                        .arg(text_arg(ARG_COMPANY, "Your company"))
                        .arg(text_arg(ARG_CONTENT, "Testimonial text").required(true))
                        .arg(rating_arg()),
                )
                .subcommand(
                    Command::new("comment")
                        .arg(text_arg(ARG_ARTICLE, "Article identifier").required(true))
                        .arg(text_arg(ARG_NAME, "Your name").required(true))
                        .arg(text_arg(ARG_EMAIL, "Your email (optional)"))
                        .arg(text_arg(ARG_CONTENT, "Comment text").required(true)),
                ),
        )
        .subcommand(
            Command::new("like")
                .about("Toggle your like on a review or article")
                .arg(
                    Arg::new(ARG_KIND)
                        .required(true)
                        .value_parser(PossibleValuesParser::new(["review", "article"])),
                )
                .arg(Arg::new(ARG_ID).required(true)),
        )
        .subcommand(
            Command::new("contact")
                .about("Send a message to the firm")
                .arg(text_arg(ARG_NAME, "Your name").required(true))
                .arg(text_arg(ARG_EMAIL, "Your email").required(true))
                .arg(text_arg(ARG_PHONE, "Phone number"))
                .arg(text_arg(ARG_SUBJECT, "Subject"))
                .arg(text_arg(ARG_MESSAGE, "Message").required(true)),
        )
        .subcommand(
            Command::new("newsletter")
                .about("Newsletter subscriptions")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("subscribe")
                        .about("Subscribe an email address")
                        .arg(text_arg(ARG_EMAIL, "Email address").required(true)),
                )
                .subcommand(Command::new("subscribers").about("List subscribers (admin)"))
                .subcommand(
                    Command::new("send")
                        .about("Send an issue to all subscribers (admin)")
                        .arg(text_arg(ARG_SUBJECT, "Subject line").required(true))
                        .arg(text_arg(ARG_CONTENT, "Issue body").required(true)),
                ),
        )
        .subcommand(
            Command::new("consent")
                .about("Record or show the cookie consent choice")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("accept"))
                .subcommand(Command::new("decline"))
                .subcommand(Command::new("show")),
        )
}
