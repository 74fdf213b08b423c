//! BOAT Swift command-line front end.
//!
//! Loads a model graph handed over by the OpenAPI parser, flattens allOf
//! inheritance and prints or writes the result.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Command, GeneratorArgs};
use boat_swift_codegen::{Generator, GeneratorConfig};
use boat_swift_model::{parse_graph_file, to_json, write_graph_file};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Flatten {
            input,
            output,
            strict,
            generator,
        } => flatten(&input, output.as_deref(), strict, &generator),
        Command::Types { input } => types(&input),
        Command::Info { generator } => info(&generator),
    }
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,boat_swift_codegen=info".to_string(),
            _ => "info,boat_swift_codegen=debug".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn build_generator(args: &GeneratorArgs) -> Result<Generator> {
    let mut builder = GeneratorConfig::builder();
    if let Some(library) = &args.library {
        builder = builder.library(library);
    }
    if let Some(project_name) = &args.project_name {
        builder = builder.project_name(project_name);
    }
    Ok(Generator::new(builder.build()?))
}

fn flatten(input: &Path, output: Option<&Path>, strict: bool, args: &GeneratorArgs) -> Result<()> {
    let mut generator = build_generator(args)?;
    let graph = parse_graph_file(input)
        .with_context(|| format!("failed to load model graph {}", input.display()))?;

    if strict {
        generator.validate(&graph)?;
    }

    let flattened = generator.post_process_all_models(&graph)?;

    match output {
        Some(path) => {
            write_graph_file(&flattened.graph, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} models to {}", flattened.graph.len(), path.display());
        }
        None => println!("{}", to_json(&flattened.graph)?),
    }

    eprintln!("{}", generator.post_process());
    Ok(())
}

fn types(input: &Path) -> Result<()> {
    let mut generator = build_generator(&GeneratorArgs::default())?;
    let graph = parse_graph_file(input)
        .with_context(|| format!("failed to load model graph {}", input.display()))?;
    let flattened = generator.post_process_all_models(&graph)?;

    for model in flattened.graph.models() {
        println!("{}", model.name);
        for decl in generator.field_declarations(model) {
            let optional = if decl.required { "" } else { "?" };
            println!("    {}: {}{}", decl.name, decl.declaration, optional);
        }
    }
    Ok(())
}

fn info(args: &GeneratorArgs) -> Result<()> {
    let generator = build_generator(args)?;
    let config = generator.config();

    println!("{} - {}", config.name(), config.help());
    println!("stability: {:?}", config.stability());
    println!("library: {}", config.library());
    println!("supported libraries:");
    for (name, help) in config.supported_libraries() {
        println!("    {}: {}", name, help);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&generator.process_opts())?
    );
    Ok(())
}
