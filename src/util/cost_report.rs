use russell_lab::format_nanoseconds;
use serde::{Deserialize, Serialize};

/// Holds the computational cost of one run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CostEntry {
    /// Name of the run
    pub name: String,

    /// Number of node updates (nodes × time steps)
    pub work: usize,

    /// Elapsed wall-clock time in nanoseconds
    pub elapsed_ns: u128,
}

/// Gathers the computational cost of several runs
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CostReport {
    pub entries: Vec<CostEntry>,
}

impl CostReport {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        CostReport { entries: Vec::new() }
    }

    /// Appends a new entry
    pub fn add(&mut self, name: &str, work: usize, elapsed_ns: u128) {
        self.entries.push(CostEntry {
            name: name.to_string(),
            work,
            elapsed_ns,
        });
    }

    /// Returns the total elapsed time
    pub fn total_ns(&self) -> u128 {
        self.entries.iter().map(|e| e.elapsed_ns).sum()
    }

    /// Returns the most expensive run (first one in case of a tie)
    pub fn most_expensive(&self) -> Option<&CostEntry> {
        let mut res: Option<&CostEntry> = None;
        for entry in &self.entries {
            match res {
                Some(current) if current.elapsed_ns >= entry.elapsed_ns => (),
                _ => res = Some(entry),
            }
        }
        res
    }

    /// Prints a summary table
    pub fn print(&self) {
        println!("{:<32} {:>14} {:>16}", "run", "node updates", "elapsed");
        for e in &self.entries {
            println!("{:<32} {:>14} {:>16}", e.name, e.work, format_nanoseconds(e.elapsed_ns));
        }
        println!("{:<32} {:>14} {:>16}", "total", "", format_nanoseconds(self.total_ns()));
        if let Some(e) = self.most_expensive() {
            println!("most expensive: {}", e.name);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
