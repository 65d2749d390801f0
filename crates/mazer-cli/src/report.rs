//! Plain-text reports: maze summaries, run statistics and comparison
//! tables.

use std::fmt::Write;

use mazer_core::{Maze, TileKind};
use mazer_paths::{CostModel, StepResult, StrategyKind};

/// Size, endpoints, special tiles and teleports of `maze`.
pub fn summary(maze: &Maze) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "size:       {} rows × {} columns", maze.height(), maze.width());
    let _ = writeln!(out, "start:      {}", maze.start());
    let _ = writeln!(out, "goal:       {}", maze.goal());
    let _ = writeln!(out, "open cells: {}", maze.open_cells());
    for kind in TileKind::ALL {
        let cells: Vec<String> = maze.tiles(kind).map(|c| c.to_string()).collect();
        if !cells.is_empty() {
            let _ = writeln!(out, "{:<11} {}", format!("{kind}:"), cells.join(" "));
        }
    }
    for (a, b) in maze.teleports() {
        let _ = writeln!(out, "teleport:   {a} <-> {b}");
    }
    if let Some(c) = maze.unpaired_teleport() {
        let _ = writeln!(out, "warning:    teleport at {c} has no partner and is ignored");
    }
    out
}

/// One line describing a terminal step.
pub fn stats_line(kind: StrategyKind, maze: &Maze, step: &StepResult, costs: &CostModel) -> String {
    let mut line = format!(
        "{kind}: {} after {} steps, {} cells explored",
        step.status,
        step.steps,
        step.explored.len()
    );
    if let Some(path) = &step.path {
        let _ = write!(
            line,
            ", path of {} moves costing {:.1}",
            path.len(),
            path.cost(maze, costs)
        );
    }
    let _ = write!(line, " ({:.2} ms)", step.elapsed.as_secs_f64() * 1000.0);
    line
}

/// A row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub strategy: String,
    pub status: String,
    pub steps: usize,
    pub explored: usize,
    pub path_len: Option<usize>,
    pub cost: Option<f64>,
    pub millis: f64,
}

impl Row {
    pub fn new(kind: StrategyKind, maze: &Maze, end: &StepResult, costs: &CostModel) -> Self {
        Self {
            strategy: kind.to_string(),
            status: end.status.to_string(),
            steps: end.steps,
            explored: end.explored.len(),
            path_len: end.path.as_ref().map(|p| p.len()),
            cost: end.path.as_ref().map(|p| p.cost(maze, costs)),
            millis: end.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Render rows as an aligned table.
pub fn table(rows: &[Row]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<9} {:>7} {:>8} {:>6} {:>7} {:>9}",
        "strategy", "status", "steps", "explored", "path", "cost", "ms"
    );
    for row in rows {
        let path = row.path_len.map_or_else(|| "-".to_string(), |n| n.to_string());
        let cost = row.cost.map_or_else(|| "-".to_string(), |c| format!("{c:.1}"));
        let _ = writeln!(
            out,
            "{:<14} {:<9} {:>7} {:>8} {:>6} {:>7} {:>9.3}",
            row.strategy, row.status, row.steps, row.explored, path, cost, row.millis
        );
    }
    out
}
