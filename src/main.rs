//! llmbench - compare LLMs on one prompt from the command line
//!
//! Thin collaborator over the core: assembles the prompt, forwards one
//! dispatch per selected model, renders whatever uniform results come back.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use llmbench_rs::core::catalog::{self, ModelDescriptor};
use llmbench_rs::core::cost;
use llmbench_rs::core::runner;
use llmbench_rs::core::types::TuningParams;
use llmbench_rs::Dispatcher;

#[derive(Parser)]
#[command(name = "llmbench", version, about = "Side-by-side LLM benchmarking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the model catalog
    Models,
    /// Run one prompt against a single model
    Run {
        /// Model ID from the catalog
        #[arg(long)]
        model: String,
        #[command(flatten)]
        prompt: PromptArgs,
        #[command(flatten)]
        tuning: TuningArgs,
    },
    /// Run one prompt against several models and compare the results
    Compare {
        /// Comma-separated model IDs, compared in the given order
        #[arg(long, value_delimiter = ',')]
        models: Vec<String>,
        #[command(flatten)]
        prompt: PromptArgs,
        #[command(flatten)]
        tuning: TuningArgs,
    },
}

#[derive(Args)]
struct PromptArgs {
    /// Prompt text; `{file_content}` splices in the attached file
    #[arg(long)]
    prompt: Option<String>,

    /// Read the prompt from a file instead
    #[arg(long, conflicts_with = "prompt")]
    prompt_file: Option<PathBuf>,

    /// Attach a UTF-8 text file to the prompt
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct TuningArgs {
    /// System prompt, for the vendors that accept one
    #[arg(long)]
    system: Option<String>,

    /// Reasoning effort for GPT-5-class models (none/low/medium/high)
    #[arg(long)]
    reasoning_effort: Option<String>,

    /// Output verbosity for GPT-5-class models (low/medium/high)
    #[arg(long)]
    verbosity: Option<String>,

    /// Enable Claude extended thinking
    #[arg(long)]
    claude_thinking: bool,

    /// Claude thinking-token budget
    #[arg(long)]
    claude_budget: Option<u32>,

    /// Thinking level for Gemini 3 models (low/high)
    #[arg(long)]
    thinking_level: Option<String>,

    /// Sampling temperature for the models that take one
    #[arg(long)]
    temperature: Option<f64>,

    /// Output-token cap, applied to every model family
    #[arg(long)]
    max_tokens: Option<u32>,
}

impl PromptArgs {
    /// Final prompt string, with optional file-content substitution
    fn assemble(&self) -> Result<String> {
        let mut prompt = match (&self.prompt, &self.prompt_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read prompt file {}", path.display()))?,
            (None, None) => String::new(),
        };

        if let Some(path) = &self.file {
            let content = read_attachment(path)?;
            prompt = if prompt.contains("{file_content}") {
                prompt.replace("{file_content}", &content)
            } else if prompt.trim().is_empty() {
                content
            } else {
                format!("{prompt}\n\n{content}")
            };
        }

        if prompt.trim().is_empty() {
            bail!("empty prompt: pass --prompt, --prompt-file or --file");
        }
        Ok(prompt)
    }
}

fn read_attachment(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read attachment {}", path.display()))
}

impl TuningArgs {
    fn into_tuning(self) -> Result<TuningParams> {
        let mut tuning = TuningParams {
            system_prompt: self.system,
            ..Default::default()
        };

        if let Some(effort) = self.reasoning_effort.as_deref() {
            let effort = effort.parse().map_err(anyhow::Error::msg)?;
            tuning.gpt51.reasoning_effort = effort;
            tuning.gpt5.reasoning_effort = effort;
        }
        if let Some(verbosity) = self.verbosity.as_deref() {
            let verbosity = verbosity.parse().map_err(anyhow::Error::msg)?;
            tuning.gpt51.verbosity = verbosity;
            tuning.gpt5.verbosity = verbosity;
        }
        if let Some(level) = self.thinking_level.as_deref() {
            tuning.gemini3.thinking_level = level.parse().map_err(anyhow::Error::msg)?;
        }

        tuning.claude.extended_thinking = self.claude_thinking;
        if let Some(budget) = self.claude_budget {
            tuning.claude.budget_tokens = budget;
        }

        if let Some(temperature) = self.temperature {
            tuning.claude.temperature = temperature;
            tuning.gemini.temperature = temperature;
            tuning.grok.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            tuning.gpt51.max_completion_tokens = max_tokens;
            tuning.gpt5.max_completion_tokens = max_tokens;
            tuning.claude.max_tokens = max_tokens;
            tuning.gemini3.max_output_tokens = max_tokens;
            tuning.gemini.max_output_tokens = max_tokens;
            tuning.grok.max_tokens = max_tokens;
        }

        Ok(tuning)
    }
}

fn resolve_models(ids: &[String]) -> Result<Vec<&'static ModelDescriptor>> {
    let mut models = Vec::with_capacity(ids.len());
    for id in ids {
        let model = catalog::find_model(id)
            .with_context(|| format!("unknown model '{id}' (see `llmbench models`)"))?;
        models.push(model);
    }
    Ok(models)
}

fn print_catalog() {
    for provider in catalog::Provider::all() {
        println!("{provider}");
        for model in catalog::models_for_provider(*provider) {
            println!(
                "  {:<30} {:<32} ${:>6.2} in / ${:>6.2} out per 1M tokens",
                model.id,
                model.display_name,
                model.input_price_per_million,
                model.output_price_per_million
            );
        }
    }
}

fn print_result(model: &ModelDescriptor, result: &llmbench_rs::GenerationResult) {
    match &result.error {
        Some(error) => println!("{}: ERROR: {error}", model.display_name),
        None => {
            println!(
                "{}: {:.2}s | {} in / {} out{} tokens | ¥{:.4}",
                model.display_name,
                result.latency_ms / 1000.0,
                result.input_tokens,
                result.output_tokens,
                if result.reasoning_tokens > 0 {
                    format!(" (+{} reasoning)", result.reasoning_tokens)
                } else {
                    String::new()
                },
                cost::cost_jpy(result, model),
            );
            println!("{}", result.content);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Models => print_catalog(),
        Command::Run {
            model,
            prompt,
            tuning,
        } => {
            let model = catalog::find_model(&model)
                .with_context(|| format!("unknown model '{model}' (see `llmbench models`)"))?;
            let prompt = prompt.assemble()?;
            let tuning = tuning.into_tuning()?;

            let dispatcher = Dispatcher::from_env();
            let result = dispatcher.dispatch(model, &prompt, &tuning).await;
            print_result(model, &result);
        }
        Command::Compare {
            models,
            prompt,
            tuning,
        } => {
            if models.is_empty() {
                bail!("no models selected: pass --models id1,id2,...");
            }
            let models = resolve_models(&models)?;
            let prompt = prompt.assemble()?;
            let tuning = tuning.into_tuning()?;

            let dispatcher = Dispatcher::from_env();
            let report = runner::run_comparison(&dispatcher, &models, &prompt, &tuning).await;

            println!(
                "{:<28} {:>8} {:>9} {:>9} {:>10} {:>10}",
                "model", "time(s)", "input", "output", "reasoning", "cost(¥)"
            );
            for entry in &report.entries {
                match &entry.result.error {
                    Some(error) => {
                        println!("{:<28} ERROR: {error}", entry.model.display_name)
                    }
                    None => println!(
                        "{:<28} {:>8.2} {:>9} {:>9} {:>10} {:>10.4}",
                        entry.model.display_name,
                        entry.result.latency_ms / 1000.0,
                        entry.result.input_tokens,
                        entry.result.output_tokens,
                        entry.result.reasoning_tokens,
                        cost::cost_jpy(&entry.result, entry.model),
                    ),
                }
            }
            println!("total: {:.2}s", report.total_elapsed_ms / 1000.0);

            for entry in report.successes() {
                println!("\n--- {} ---", entry.model.display_name);
                println!("{}", entry.result.content);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
