//! Text rendering of a maze with a step's progress overlaid, and the
//! terminal animation used by `solve --animate`.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use mazer_core::{Cell, Maze};
use mazer_paths::StepResult;

pub const PATH: char = '.';
pub const EXPLORED: char = '·';
pub const CURRENT: char = '@';

/// Draw `maze` with the step's path (`.`), and optionally the explored
/// cells (`·`) and the current cell (`@`), on top. Start and goal keep
/// their glyphs.
pub fn render(maze: &Maze, step: &StepResult, show_explored: bool) -> String {
    let mut rows: Vec<Vec<char>> = maze
        .to_string()
        .lines()
        .map(|l| {
            let mut row: Vec<char> = l.chars().collect();
            row.resize(maze.width(), ' ');
            row
        })
        .collect();

    let mut put = |c: Cell, ch: char| {
        if c == maze.start() || c == maze.goal() {
            return;
        }
        if let Some(slot) = rows
            .get_mut(c.row as usize)
            .and_then(|r| r.get_mut(c.col as usize))
        {
            *slot = ch;
        }
    };

    if show_explored {
        for &c in &step.explored {
            put(c, EXPLORED);
        }
    }
    if let Some(path) = &step.path {
        for &c in &path.cells {
            put(c, PATH);
        }
    }
    if show_explored && !step.is_terminal() {
        if let Some(c) = step.current {
            put(c, CURRENT);
        }
    }

    let mut out = String::with_capacity(rows.len() * (maze.width() + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn color_of(ch: char) -> Color {
    match ch {
        PATH => Color::Green,
        EXPLORED => Color::DarkGrey,
        CURRENT => Color::Yellow,
        'A' | 'B' => Color::Cyan,
        'T' => Color::Magenta,
        _ => Color::Reset,
    }
}

/// Redraws frames on the alternate screen until dropped.
pub struct Animator {
    out: io::Stdout,
}

impl Animator {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Replace the screen with `frame` followed by `status`.
    pub fn draw(&mut self, frame: &str, status: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::All)
        )?;
        for (y, line) in frame.lines().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for ch in line.chars() {
                queue!(self.out, SetForegroundColor(color_of(ch)), Print(ch))?;
            }
        }
        let y = frame.lines().count() as u16 + 1;
        queue!(self.out, ResetColor, cursor::MoveTo(0, y), Print(status))?;
        self.out.flush()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
    }
}
