use clap::Parser;
use kaiwa::prelude::*;
use std::fs;
use std::process::ExitCode;

/// Compile, inspect, and validate a workflow configuration document.
#[derive(Parser)]
#[command(name = "kaiwa-cli", version, about)]
struct Cli {
    /// Path to the workflow configuration JSON
    config: String,

    /// Optional path to write the round-tripped document back out
    #[arg(long)]
    output: Option<String>,

    /// Print the editable graph as JSON instead of a summary
    #[arg(long)]
    dump_graph: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(valid) => {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = WorkflowConfig::from_file(&cli.config)?;
    let graph = to_graph(&config);

    if cli.dump_graph {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    } else {
        println!(
            "Workflow '{}': {} nodes, {} edges, initial node '{}'",
            cli.config,
            graph.nodes.len(),
            graph.edges.len(),
            config.initial_node
        );
        for node in &graph.nodes {
            println!("  [{:?}] {} ({})", node.visual(), node.name, node.id);
            for edge in graph.edges_from(&node.id) {
                let summary = edge.summary(|id| graph.node(id).map(|n| n.name.clone()));
                println!("    {}", summary);
            }
        }
    }

    let report = validate(&graph);
    if report.is_valid() {
        println!("Validation: OK");
    } else {
        println!("Validation: {} problem(s)", report.issues().len());
        for error in report.errors() {
            println!("  - {}", error);
        }
    }

    if let Some(output) = &cli.output {
        let round_tripped = to_config(&graph, Some(&config));
        fs::write(output, round_tripped.to_json()?)?;
        println!("Wrote round-tripped document to '{}'", output);
    }

    Ok(report.is_valid())
}
