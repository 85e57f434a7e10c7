mod provenance;
mod response;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rubik::api::{CubeState, ReplayToken, ScrambleGenerator, SessionCfg};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cube scramble/replay server and tools")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Serve GET /solve over HTTP
    Serve {
        #[arg(long, env = "RUBIK_BIND", default_value = "0.0.0.0:8000")]
        bind: String,
        /// Longest accepted scramble in tokens; longer requests get a 500
        #[arg(long, default_value_t = SessionCfg::default().max_scramble_len)]
        max_scramble_len: usize,
    },
    /// Run one scramble/replay session and print (or write) the JSON result
    Solve {
        #[arg(long, default_value = "")]
        scramble: String,
        /// Write to this path plus a provenance sidecar instead of stdout
        #[arg(long)]
        out: Option<String>,
        #[arg(long, default_value_t = SessionCfg::default().max_scramble_len)]
        max_scramble_len: usize,
    },
    /// Print a reproducible random scramble
    Scramble {
        #[arg(long, default_value_t = 20)]
        length: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Also print the scrambled cube as a net
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Serve {
            bind,
            max_scramble_len,
        } => serve(bind, SessionCfg { max_scramble_len }),
        Action::Solve {
            scramble,
            out,
            max_scramble_len,
        } => solve(scramble, out, SessionCfg { max_scramble_len }),
        Action::Scramble {
            length,
            seed,
            index,
            show,
        } => scramble(length, ReplayToken { seed, index }, show),
    }
}

fn serve(bind: String, cfg: SessionCfg) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server::serve(&bind, cfg))
}

fn solve(scramble: String, out: Option<String>, cfg: SessionCfg) -> Result<()> {
    let resp = response::solve_scramble(&scramble, cfg)?;
    let Some(out) = out else {
        println!("{}", serde_json::to_string(&resp)?);
        return Ok(());
    };

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec(&resp)?)?;
    let record = provenance::SolveProvenance::new(out_path, &scramble, cfg, &resp);
    let prov_path = provenance::write_sidecar(out_path, &record)?;
    tracing::info!(out, provenance = %prov_path.display(), "wrote solve result");
    Ok(())
}

fn scramble(length: usize, tok: ReplayToken, show: bool) -> Result<()> {
    let gen = ScrambleGenerator::new(tok.seed, length);
    let moves = gen.regenerate(tok);
    let line: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    println!("{}", line.join(" "));
    if show {
        let mut cube = CubeState::solved();
        cube.apply_all(moves);
        print!("{cube}");
    }
    Ok(())
}
