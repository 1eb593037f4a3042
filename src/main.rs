use std::process;

use intravox_demo::{
    application::{backgrounds, check, error::AppError, generate, localize, translate},
    config::{self, CheckArgs, Command, CopyLanguageArgs, Settings},
    domain::demo,
    infra::{error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| InfraError::configuration(err.to_string()))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match cli_args.command {
        None | Some(Command::Generate(_)) => run_generate(&settings),
        Some(Command::Check(args)) => run_check(&settings, &args),
        Some(Command::NormalizeBackgrounds(_)) => run_normalize_backgrounds(&settings),
        Some(Command::CopyLanguage(args)) => run_copy_language(&settings, &args),
        Some(Command::TranslateContent(_)) => run_translate_content(&settings),
    }
}

fn run_generate(settings: &Settings) -> Result<(), AppError> {
    info!(
        target = "intravox_demo::generate",
        root = %settings.output.language_root().display(),
        language = %settings.output.language,
        "Starting generation"
    );
    let report = generate::generate(settings)?;
    println!("Generated {} pages", report.pages.len());
    for path in &report.pages {
        println!("  {path}");
    }
    Ok(())
}

fn run_check(settings: &Settings, args: &CheckArgs) -> Result<(), AppError> {
    let report = if args.tree {
        check::check_tree(&settings.output.language_root())?
    } else {
        check::check_table(demo::demo_pages())
    };
    check::enforce(&report)?;
    println!("Checked {} pages, no layout issues", report.pages);
    Ok(())
}

fn run_normalize_backgrounds(settings: &Settings) -> Result<(), AppError> {
    let report = backgrounds::normalize_tree(&settings.output.language_root())?;
    println!("Fixed {} of {} files", report.fixed.len(), report.scanned);
    Ok(())
}

fn run_copy_language(settings: &Settings, args: &CopyLanguageArgs) -> Result<(), AppError> {
    info!(
        target = "intravox_demo::copy_language",
        from = %args.from,
        to = %args.to,
        "Starting language copy"
    );
    let report = localize::copy_language(&settings.output.directory, &args.from, &args.to)?;
    println!(
        "Processed {} page files, mapped {} unique IDs",
        report.pages, report.mapped
    );
    Ok(())
}

fn run_translate_content(settings: &Settings) -> Result<(), AppError> {
    let report = translate::translate_tree(&settings.output.language_root())?;
    println!(
        "Translated {} of {} files",
        report.translated.len(),
        report.scanned
    );
    Ok(())
}
