use crate::cli::Cli;
use crate::dispatcher::Dispatcher;
use crate::dispatcher::config::DispatcherConfig;
use crate::notifier::{ConsoleNotifier, Notifier, Severity};
use clap::Parser;
use grc_codegen::prelude::{DirectoryTemplates, EmbeddedTemplates, GeneratorConfig, TemplateSource};
use tracing::info;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod dispatcher;
mod error;
mod notifier;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();

    let workspace_root = match cli.workspace {
        Some(workspace) => workspace,
        None => std::env::current_dir()?,
    };
    let dispatcher_config = DispatcherConfig::new(workspace_root);
    let generator_config = GeneratorConfig::default();

    let source: Box<dyn TemplateSource> = match cli.templates {
        Some(templates) => Box::new(DirectoryTemplates::new(templates)),
        None => Box::new(EmbeddedTemplates),
    };

    let notifier = ConsoleNotifier;
    let dispatcher = Dispatcher::new(
        &dispatcher_config,
        &generator_config,
        source.as_ref(),
        &notifier,
    );

    let Some((variant, folder)) = cli.command.generation() else {
        match dispatcher.templates().await {
            Ok(templates) => {
                for (template, variant) in templates {
                    match variant {
                        Some(variant) => {
                            println!("{} ({})", template.file_name, variant.command_id())
                        }
                        None => println!("{} (unused)", template.file_name),
                    }
                }
            }
            Err(error) => notifier.notify(Severity::Error, &error.to_string()),
        }

        return Ok(());
    };

    info!(
        command = variant.command_id(),
        source = source.name(),
        "Generate React Component is active"
    );

    dispatcher.run(variant, folder).await?;

    Ok(())
}
