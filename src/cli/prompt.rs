use std::io::{self, BufRead, Write};
use crate::sorting::resolver::{CandidateFolder, CandidateSelector};

/// Asks on the terminal which near-duplicate folder to use.
///
/// Keeps reading lines until one parses to a number in `0..=N`. End of input
/// answers `0` so a closed stdin cannot hang the run.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show(&mut self, desired_name: &str, candidates: &[CandidateFolder]) -> io::Result<()> {
        writeln!(
            self.output,
            "Similar folders found to {}. Please select one by typing in the number or type 0 for creating the folder.",
            desired_name
        )?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, candidate.path.display())?;
        }
        write!(self.output, "Selection: ")?;
        self.output.flush()
    }

    fn read_selection(&mut self, max: usize) -> usize {
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return 0,
                Ok(_) => {}
            }
            if let Ok(selection) = line.trim().parse::<usize>() {
                if selection <= max {
                    return selection;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> CandidateSelector for ConsolePrompt<R, W> {
    fn select_candidate(&mut self, desired_name: &str, candidates: &[CandidateFolder]) -> usize {
        // prompt output is best effort, the answer still comes from input
        let _ = self.show(desired_name, candidates);
        self.read_selection(candidates.len())
    }
}
