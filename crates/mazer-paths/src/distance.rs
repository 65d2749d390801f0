//! Distance lower bounds for heuristic search.

use mazer_core::{Cell, Maze};

/// Manhattan distance to a fixed goal, lowered through teleport pairs.
///
/// For every teleport entry `a` the table holds `L(a)`, a lower bound on
/// the number of moves from `a` to the goal when the first move is the
/// jump out of `a`. The estimate for a cell `c` is then
/// `min(|c - goal|, min_a |c - a| + L(a))` moves, which never exceeds the
/// true move count whether or not teleports are used, and changes by at
/// most one per move (consistency).
#[derive(Debug, Clone)]
pub struct PortalDistance {
    goal: Cell,
    entries: Vec<(Cell, i32)>,
}

impl PortalDistance {
    pub fn new(maze: &Maze) -> Self {
        let goal = maze.goal();
        let links: Vec<(Cell, Cell)> = maze
            .teleports()
            .iter()
            .flat_map(|&(a, b)| [(a, b), (b, a)])
            .collect();

        let mut bound: Vec<i32> = links.iter().map(|&(_, out)| 1 + out.manhattan(goal)).collect();
        // Bellman-Ford over the entries; every edge weight is positive so
        // this settles in at most `links.len()` rounds.
        for _ in 0..links.len() {
            let mut changed = false;
            for i in 0..links.len() {
                let out = links[i].1;
                for j in 0..links.len() {
                    let candidate = 1 + out.manhattan(links[j].0) + bound[j];
                    if candidate < bound[i] {
                        bound[i] = candidate;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        Self {
            goal,
            entries: links.iter().map(|&(a, _)| a).zip(bound).collect(),
        }
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Lower bound on the number of moves from `from` to the goal.
    pub fn moves(&self, from: Cell) -> i32 {
        self.entries
            .iter()
            .map(|&(entry, bound)| from.manhattan(entry) + bound)
            .fold(from.manhattan(self.goal), i32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_manhattan_without_teleports() {
        let maze = Maze::parse("A   \n    \n   B").unwrap();
        let d = PortalDistance::new(&maze);
        assert_eq!(d.moves(maze.start()), 5);
        assert_eq!(d.moves(maze.goal()), 0);
    }

    #[test]
    fn teleport_shortens_the_bound() {
        // T at (0,1) links to T at (4,3); goal at (4,4).
        let maze = Maze::parse("AT   \n     \n     \n     \n   TB").unwrap();
        let d = PortalDistance::new(&maze);
        assert_eq!(maze.start().manhattan(maze.goal()), 8);
        // one step to the entry, one jump, one step to the goal
        assert_eq!(d.moves(maze.start()), 3);
    }

    #[test]
    fn chained_teleports_stay_admissible() {
        // a1 (0,1) -> b1 (0,8); a2 (0,9) -> b2 (6,9) next to the goal (6,8).
        let maze = Maze::parse(
            "AT      TT\n##########\n          \n          \n          \n          \n        BT",
        )
        .unwrap();
        let d = PortalDistance::new(&maze);
        // Route: right, jump, right, jump, left = 5 moves.
        assert!(d.moves(maze.start()) <= 5);
    }
}
