//! `mazer`: load a maze and drive the solvers over it.
//!
//! Usage:
//!   mazer check <FILE>
//!   mazer solve <FILE> [--strategy S] [--json] [--animate MS] [--deadline-ms MS]
//!   mazer compare <FILE> [--strategies S,S,...]
//!
//! Solver options (`solve`, `compare`):
//!   --config <FILE.json>     Load a solver configuration; flags override it
//!   --heuristic-weight <f>   A* heuristic multiplier (default: 1.0)
//!   --penalty-cost <f>       Penalty tile cost (default: 5.0 Dijkstra, 2.0 A*)
//!   --reward-cost <f>        Reward tile cost (default: 0.5)
//!   --hint-cost <f>          Hint tile cost (default: 0.7)
//!   --hand <left|right>      Wall-follower hand
//!   --iteration-cap <n>      Wall-follower move budget (default: 4 × w × h)
//!   --no-unlock              Hints do not unlock their neighbours

mod logger;
mod render;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use mazer_core::Maze;
use mazer_paths::{
    CostModel, Hand, SolverConfig, StepResult, Strategy, StrategyKind, create_strategy,
    run_to_end,
};

#[derive(Parser, Debug)]
#[command(name = "mazer")]
#[command(about = "Step-wise maze solving: DFS, BFS, Dijkstra, A*, wall following, dead-end filling")]
#[command(version)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a maze and print a summary
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Solve a maze with one strategy
    Solve {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// dfs, bfs, dijkstra, astar, left-hand, right-hand or dead-end-fill
        #[arg(short, long, default_value = "astar")]
        strategy: StrategyKind,

        /// Print the terminal step as JSON instead of a drawing
        #[arg(long)]
        json: bool,

        /// Redraw the maze after every step, pausing this many milliseconds
        #[arg(long, value_name = "MS")]
        animate: Option<u64>,

        /// Stop pulling steps once this many milliseconds have passed
        #[arg(long, value_name = "MS")]
        deadline_ms: Option<u64>,

        /// Also mark explored cells in the drawing
        #[arg(long)]
        explored: bool,

        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Run several strategies and tabulate the results
    Compare {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Strategies to run (default: all)
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<StrategyKind>,

        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Args, Debug, Default)]
struct SolverArgs {
    /// Solver configuration as JSON
    #[arg(long, value_name = "FILE.json")]
    config: Option<PathBuf>,

    #[arg(long)]
    heuristic_weight: Option<f64>,

    #[arg(long)]
    penalty_cost: Option<f64>,

    #[arg(long)]
    reward_cost: Option<f64>,

    #[arg(long)]
    hint_cost: Option<f64>,

    #[arg(long)]
    hand: Option<Hand>,

    #[arg(long)]
    iteration_cap: Option<usize>,

    #[arg(long)]
    no_unlock: bool,
}

impl SolverArgs {
    /// The file configuration (or the default) with flags applied on top.
    fn resolve(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid solver config in {}", path.display()))?
            }
            None => SolverConfig::default(),
        };
        if let Some(w) = self.heuristic_weight {
            config.heuristic_weight = w;
        }
        if let Some(p) = self.penalty_cost {
            config.penalty_cost = Some(p);
        }
        if let Some(r) = self.reward_cost {
            config.reward_cost = r;
        }
        if let Some(h) = self.hint_cost {
            config.hint_cost = h;
        }
        if let Some(hand) = self.hand {
            config.hand = Some(hand);
        }
        if let Some(cap) = self.iteration_cap {
            config.iteration_cap = Some(cap);
        }
        if self.no_unlock {
            config.unlock_hints = false;
        }
        config.validate().context("invalid solver configuration")?;
        Ok(config)
    }
}

fn load_maze(path: &Path) -> Result<Maze> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read maze file {}", path.display()))?;
    Maze::parse(&text).with_context(|| format!("invalid maze in {}", path.display()))
}

/// How a driven run ended.
enum Outcome {
    Finished(StepResult),
    /// The deadline passed; carries the last step pulled.
    DeadlineExceeded(StepResult),
}

fn drive(
    maze: &Maze,
    kind: StrategyKind,
    config: &SolverConfig,
    animate: Option<u64>,
    deadline: Option<Duration>,
) -> Result<Outcome> {
    let mut strategy = create_strategy(kind, maze, config)?;
    let mut animator = animate.map(|_| render::Animator::new()).transpose()?;
    let pause = Duration::from_millis(animate.unwrap_or(0));
    let began = Instant::now();

    loop {
        let step = strategy.pull_step()?;
        if let Some(anim) = animator.as_mut() {
            let frame = render::render(maze, &step, true);
            let status = format!("{kind}: {} (step {})", step.status, step.steps);
            anim.draw(&frame, &status)?;
            if !step.is_terminal() {
                thread::sleep(pause);
            }
        }
        if step.is_terminal() {
            return Ok(Outcome::Finished(step));
        }
        log::trace!("{kind} step {} at {:?}", step.steps, step.current);
        if deadline.is_some_and(|d| began.elapsed() >= d) {
            log::info!("{kind} stopped after {} steps", step.steps);
            return Ok(Outcome::DeadlineExceeded(step));
        }
    }
}

fn check(path: &Path) -> Result<()> {
    let maze = load_maze(path)?;
    print!("{}", report::summary(&maze));
    Ok(())
}

fn solve(
    path: &Path,
    kind: StrategyKind,
    json: bool,
    animate: Option<u64>,
    deadline_ms: Option<u64>,
    show_explored: bool,
    solver: &SolverArgs,
) -> Result<()> {
    let maze = load_maze(path)?;
    let config = solver.resolve()?;
    let deadline = deadline_ms.map(Duration::from_millis);

    let step = match drive(&maze, kind, &config, animate, deadline)? {
        Outcome::Finished(step) => step,
        Outcome::DeadlineExceeded(step) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&step)?);
            }
            bail!(
                "{kind} exceeded the {} ms deadline after {} steps",
                deadline.map_or(0, |d| d.as_millis()),
                step.steps
            );
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&step)?);
    } else {
        print!("{}", render::render(&maze, &step, show_explored));
        let costs = config.cost_model(CostModel::DIJKSTRA_PENALTY);
        println!("{}", report::stats_line(kind, &maze, &step, &costs));
    }
    Ok(())
}

fn compare(path: &Path, strategies: &[StrategyKind], solver: &SolverArgs) -> Result<()> {
    let maze = load_maze(path)?;
    let config = solver.resolve()?;
    let kinds: &[StrategyKind] = if strategies.is_empty() {
        &StrategyKind::ALL
    } else {
        strategies
    };
    let rows = compare_rows(&maze, kinds, &config)?;
    print!("{}", report::table(&rows));
    Ok(())
}

/// Run each strategy to the end. Rows are labelled with the strategy that
/// actually ran, so a configured hand can fold both wall followers into one.
fn compare_rows(
    maze: &Maze,
    kinds: &[StrategyKind],
    config: &SolverConfig,
) -> Result<Vec<report::Row>> {
    let costs = config.cost_model(CostModel::DIJKSTRA_PENALTY);
    let mut ran = Vec::with_capacity(kinds.len());
    let mut rows = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let mut strategy = create_strategy(kind, maze, config)?;
        let actual = strategy.kind();
        if ran.contains(&actual) {
            log::debug!("{kind} runs as {actual}, already compared");
            continue;
        }
        ran.push(actual);
        let end = run_to_end(strategy.as_mut())?;
        rows.push(report::Row::new(actual, maze, &end, &costs));
    }
    Ok(rows)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Solve {
            file,
            strategy,
            json,
            animate,
            deadline_ms,
            explored,
            solver,
        } => solve(&file, strategy, json, animate, deadline_ms, explored, &solver),
        Commands::Compare {
            file,
            strategies,
            solver,
        } => compare(&file, &strategies, &solver),
    }
}
