use std::env;
use std::ffi::OsStr;

use anyhow::Context as _;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};
use time::OffsetDateTime;

use cra_sheet::config::{Config, TemplateText};
use cra_sheet::generate_cra;
use cra_sheet::sheet::{MonthKey, WorkedDays};
use cra_sheet::template::TemplateId;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use core::fmt;

    use log::error;
    use seahorse::{Command, Context};

    type TryAction<E> = fn(_: &Context) -> Result<(), E>;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    pub trait TryActionExt {
        #[must_use]
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike;
    }

    impl TryActionExt for Command {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }
}

use seahorse_exts::TryActionExt;

/// Environment keys overriding the text blocks of template 1.
fn text_from_env(file: TemplateText) -> TemplateText {
    fn env_or(key: &str, fallback: String) -> String {
        env::var(key).unwrap_or(fallback)
    }

    TemplateText {
        sender: env_or("TEMPLATE1_SENDER", file.sender),
        receiver: env_or("TEMPLATE1_RECEIVER", file.receiver),
        subject_prefix: env_or("TEMPLATE1_SUBJECT_PREFIX", file.subject_prefix),
        total_label: env_or("TEMPLATE1_TOTAL_TITLE", file.total_label),
        sender_signature_title: env_or(
            "TEMPLATE1_SENDER_SIGNATURE_TITLE",
            file.sender_signature_title,
        ),
        receiver_signature_title: env_or(
            "TEMPLATE1_RECEIVER_SIGNATURE_TITLE",
            file.receiver_signature_title,
        ),
    }
}

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let now = OffsetDateTime::now_utc();

    let year = context
        .int_flag("year")
        .map(|year| year as i64)
        .unwrap_or_else(|_| now.year() as i64);
    let month = context
        .int_flag("month")
        .map(|month| usize::try_from(month).unwrap_or(0))
        .unwrap_or_else(|_| u8::from(now.month()) as usize);

    let month = MonthKey::from_numbers(year, month)?;

    let template = context
        .int_flag("template")
        .map(|id| usize::try_from(id).unwrap_or(0))
        .unwrap_or(1);
    let template = TemplateId::new(template)?;

    let worked_days: WorkedDays = context
        .string_flag("worked-days")
        .unwrap_or_default()
        .parse()?;

    let mut text = TemplateText::default();
    if let Ok(path) = context.string_flag("config") {
        let path = dunce::canonicalize(&path)
            .with_context(|| format!("can not resolve config file \"{}\"", path))?;
        text = TemplateText::from_toml_file(&path)
            .with_context(|| format!("failed to read \"{}\"", path.display()))?;
    }
    let text = text_from_env(text);

    let mut builder = Config::builder(month);
    builder.worked_days(worked_days).template(template).text(text);

    if let Ok(output) = context.string_flag("output") {
        builder.output(output);
    }

    Ok(builder.build())
}

fn generate(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    generate_cra(&config)?;

    info!("successfully generated {}", config.output().display());

    Ok(())
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let generate_command = Command::new("generate")
        .usage(format!("{} generate [args]", args[0]))
        .description("Generates the CRA sheet for a month.")
        .flag(
            Flag::new("output", FlagType::String)
                .alias("o")
                .description("[optional] Output file name. Default: `cra-<year>-<month>.txt`"),
        )
        .flag(
            Flag::new("template", FlagType::Int)
                .alias("t")
                .description("[optional] Template identifier (only available value: 1)"),
        )
        .flag(
            Flag::new("year", FlagType::Int)
                .description("[optional] Target year. Default: the current year"),
        )
        .flag(
            Flag::new("month", FlagType::Int)
                .description("[optional] Target month (1-12). Default: the current month"),
        )
        .flag(
            Flag::new("worked-days", FlagType::String)
                .alias("d")
                .description("[optional] Comma separated worked day numbers, for example `1,4,5`"),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .alias("c")
                .description("[optional] Path to a toml file with the template text blocks"),
        )
        .try_action(generate);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(generate_command);

    app.run(args);
}
