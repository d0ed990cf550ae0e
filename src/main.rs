use cinematch::cli::commands::{Cli, Commands};
use cinematch::cli::protocol::{self, Request, Response};
use cinematch::CineMatch;
use clap::Parser;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cm = match CineMatch::new(cli.dim) {
        Ok(cm) => cm,
        Err(e) => {
            eprintln!("Error initializing cinematch: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(cm, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cm: CineMatch, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut lines = stdin.lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                let response = match serde_json::from_str::<Request>(&line) {
                    Ok(request) => protocol::handle(&cm, request).await,
                    Err(e) => Response::Error {
                        status: "INVALID_ARGUMENT",
                        message: format!("malformed request: {e}"),
                    },
                };
                println!("{}", serde_json::to_string(&response)?);
            }
        }
        Commands::Demo { file, id, limit } => {
            #[derive(Deserialize)]
            struct Seed {
                id: String,
                title: String,
                #[serde(default)]
                overview: String,
            }

            let raw = std::fs::read_to_string(&file)?;
            let seeds: Vec<Seed> = serde_json::from_str(&raw)?;
            for seed in &seeds {
                cm.add_movie(&seed.id, &seed.title, &seed.overview).await?;
            }
            eprintln!("Indexed {} movies", cm.movie_count());

            let movies = cm.similar_movies(&id, limit)?;
            println!("{}", serde_json::to_string_pretty(&movies)?);
        }
    }
    Ok(())
}
