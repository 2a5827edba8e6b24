use clap::Parser;
use log::LevelFilter;
use audio_file_sorter::{
    cli::{commands::Cli, prompt::ConsolePrompt},
    utils::{move_log::MoveLog, reporting::Reporter},
    LibrarySorter, MetadataExtractor,
};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.output { LevelFilter::Info } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    if let Err(e) = cli.validate() {
        e.exit();
    }

    let formats = match cli.format_matcher() {
        Ok(formats) => formats,
        Err(e) => e.exit(),
    };

    println!("=== Sorting {} into {} ===", cli.source.display(), cli.destination.display());

    let sorter = LibrarySorter::new(
        cli.sort_config(),
        formats,
        MetadataExtractor,
        MoveLog::new(&cli.log_file),
    );
    let mut prompt = ConsolePrompt::stdio();

    let summary = match sorter.run(&cli.source, &cli.destination, &mut prompt) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error sorting files: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(report_path) = &cli.report {
        match Reporter::new().generate_move_report(&summary, report_path) {
            Ok(()) => println!("Report saved to: {}", report_path.display()),
            Err(e) => eprintln!("Error generating report: {}", e),
        }
    }

    println!(
        "\n{} moved, {} skipped, {} failed of {} files",
        summary.moved, summary.skipped, summary.failed, summary.discovered
    );
    println!("\nFinished");
}
