use std::collections::{HashSet, VecDeque};

use mazer_core::{Cell, Maze, TileKind};

use crate::error::SolveError;
use crate::neighbors::Move;
use crate::node::NodeId;
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};
use crate::traits::Pather;

/// Breadth-first search with priority lanes.
///
/// Nodes are taken from the front of the queue. Newly discovered reward
/// and teleport cells jump to the front; everything else, penalties
/// included, joins the back. On mazes without such tiles this is plain
/// breadth-first order and the path is a shortest one in moves.
#[derive(Debug)]
pub struct Bfs<'m> {
    maze: &'m Maze,
    queue: VecDeque<NodeId>,
    queued: HashSet<Cell>,
    nbuf: Vec<Move>,
    search: Search,
}

impl<'m> Bfs<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        let mut search = Search::new();
        let root = search.nodes.root(maze.start());
        Self {
            maze,
            queue: VecDeque::from([root]),
            queued: HashSet::from([maze.start()]),
            nbuf: Vec::new(),
            search,
        }
    }

    fn jumps_the_line(&self, c: Cell) -> bool {
        self.maze.classify(c).is_some_and(TileKind::is_reward)
            || self.maze.teleport_partner(c).is_some()
    }

    fn advance(&mut self) -> StepResult {
        loop {
            let Some(id) = self.queue.pop_front() else {
                return self.search.failed();
            };
            let cell = self.search.nodes.state(id);
            self.queued.remove(&cell);
            if self.search.is_explored(cell) {
                continue;
            }
            if cell == self.maze.goal() {
                return self.search.done(id);
            }
            self.search.mark(cell);

            let mut nbuf = std::mem::take(&mut self.nbuf);
            nbuf.clear();
            self.maze.moves(cell, &mut nbuf);
            for &mv in &nbuf {
                if self.search.is_explored(mv.to) || self.queued.contains(&mv.to) {
                    continue;
                }
                let child = self.search.nodes.child(id, mv);
                if self.jumps_the_line(mv.to) {
                    self.queue.push_front(child);
                } else {
                    self.queue.push_back(child);
                }
                self.queued.insert(mv.to);
            }
            self.nbuf = nbuf;
            return self.search.exploring(cell);
        }
    }
}

impl Strategy for Bfs<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bfs
    }

    fn pull_step(&mut self) -> Result<StepResult, SolveError> {
        self.search.begin()?;
        Ok(self.advance())
    }

    fn is_finished(&self) -> bool {
        self.search.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Status;
    use crate::strategy::run_to_end;

    #[test]
    fn expands_in_layers() {
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let mut bfs = Bfs::new(&maze);
        let order: Vec<_> = (0..3)
            .map(|_| bfs.pull_step().unwrap().current.unwrap())
            .collect();
        // down is queued before right
        assert_eq!(
            order,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn shortest_in_moves_on_plain_mazes() {
        let maze = Maze::parse("A    \n ### \n     \n ### \n    B").unwrap();
        let end = run_to_end(&mut Bfs::new(&maze)).unwrap();
        assert_eq!(end.status, Status::Done);
        assert_eq!(end.path.unwrap().len(), 8);
    }

    #[test]
    fn reward_cells_jump_the_queue() {
        // Both (1,0) and (0,1) are discovered from A; the reward on the
        // right is expanded first although down was queued first.
        let maze = Maze::parse("AN \n   \n  B").unwrap();
        let mut bfs = Bfs::new(&maze);
        bfs.pull_step().unwrap();
        assert_eq!(bfs.pull_step().unwrap().current, Some(Cell::new(0, 1)));
    }

    #[test]
    fn unreachable_goal_fails_with_explored_region() {
        let maze = Maze::parse("A #\n  #\n##B").unwrap();
        let end = run_to_end(&mut Bfs::new(&maze)).unwrap();
        assert_eq!(end.status, Status::Failed);
        assert_eq!(end.steps, 4);
        assert_eq!(end.explored.len(), 4);
        assert!(end.path.is_none());
    }
}
